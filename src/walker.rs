//! Depth-first traversal of the atom tree.
//!
//! Each atom is handed to a `Visitor` together with its path
//! and a bounded view over its data load, *before* its children
//! (if it is a container) are visited, i.e. pre-order.
//!
//! Uses an explicit stack rather than recursion,
//! so deeply nested (or hostile) files can not
//! exhaust the call stack.

use std::io::{Read, Seek};

use tracing::trace;

use crate::{AtomHeader, AtomPath, GpsError, Section, Source};

/// Invoked once per atom by `walk()`/`walk_section()`.
pub trait Visitor<R> {
    /// `path` includes the current atom.
    /// `data` is a view over the atom's data load only (header excluded).
    /// Reading from `data` does not affect the traversal.
    ///
    /// Returning an error aborts the traversal.
    fn visit(&mut self, path: &AtomPath, data: &mut Section<'_, R>) -> Result<(), GpsError>;
}

/// Atoms on one nesting level.
struct Frame<'a, R> {
    /// Path for the parent atom.
    path: AtomPath,
    /// Remaining siblings.
    section: Section<'a, R>,
}

/// Visits all atoms in `source`, starting at byte 0.
pub fn walk<R, V>(source: &Source<R>, visitor: &mut V) -> Result<(), GpsError>
where
    R: Read + Seek,
    V: Visitor<R> + ?Sized,
{
    walk_section(source.section(), visitor)
}

/// Visits all atoms in `section`, treating its first
/// byte as the start of the first top-level atom.
pub fn walk_section<'a, R, V>(section: Section<'a, R>, visitor: &mut V) -> Result<(), GpsError>
where
    R: Read + Seek,
    V: Visitor<R> + ?Sized,
{
    let mut stack = vec![Frame {
        path: AtomPath::default(),
        section,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some((header, data)) = AtomHeader::read(&mut frame.section, &frame.path)? else {
            stack.pop();
            continue;
        };

        let path = frame.path.join(header.name);
        trace!("{path} @ {} size: {}", header.offset, header.atom_size);

        // separate view, visitor reads must not move the walker
        visitor.visit(&path, &mut data.clone())?;

        if header.is_container() {
            stack.push(Frame {
                path,
                section: data,
            });
        }
    }

    Ok(())
}

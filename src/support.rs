/// Single-byte chars from `[u8; 4]`.
/// Maps 0-255 to `char`, exceeding ascii.
pub(crate) fn chars_from_bytes(bytes: [u8; 4]) -> [char; 4] {
    [
        bytes[0] as char,
        bytes[1] as char,
        bytes[2] as char,
        bytes[3] as char,
    ]
}

/// Splits a decimal-minutes value (`DDDMM.MMMM`)
/// into whole degrees and the remaining fraction
/// of 100, i.e. `(DDD, 0.MMMMMM)`.
pub(crate) fn modf_hundreds(value: f32) -> (f64, f64) {
    let v = value as f64 / 100.0;
    let whole = v.trunc();
    (whole, v - whole)
}

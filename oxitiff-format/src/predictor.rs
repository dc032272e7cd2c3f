//! Horizontal differencing predictor (Predictor = 2) for 8-bit samples.
//!
//! Before compression each byte of a row had the byte `samples` positions
//! to its left subtracted from it (wrapping), so every channel is
//! differenced on its own. Reversal undoes this left to right, in place.

/// Undo horizontal differencing in place.
///
/// `stride` is the number of bytes in one row, `samples` the channel count.
/// The first `samples` bytes of each row are left as they are; a trailing
/// partial row is reversed over the bytes it has. A zero `stride` or
/// `samples` leaves the buffer unchanged.
pub fn reverse(buf: &mut [u8], stride: usize, samples: usize) {
    if stride == 0 || samples == 0 {
        return;
    }
    for row in buf.chunks_mut(stride) {
        for x in samples..row.len() {
            row[x] = row[x].wrapping_add(row[x - samples]);
        }
    }
}

/// Apply horizontal differencing in place; the inverse of [`reverse`].
pub fn apply(buf: &mut [u8], stride: usize, samples: usize) {
    if stride == 0 || samples == 0 {
        return;
    }
    for row in buf.chunks_mut(stride) {
        for x in (samples..row.len()).rev() {
            row[x] = row[x].wrapping_sub(row[x - samples]);
        }
    }
}

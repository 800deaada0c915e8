use crate::core::constants::QUADRANT_ALPHABET;
use crate::util::error::QuadHashError;

/// Encodes a pair of tile parities as one hash character.
///
/// The digit is `2 * y_parity + x_parity`, so `0` is the north-west child,
/// `1` north-east, `2` south-west and `3` south-east. Only the lowest bit of
/// each parity is used.
#[inline]
pub fn encode_quadrant(x_parity: u8, y_parity: u8) -> char {
    QUADRANT_ALPHABET[usize::from(2 * (y_parity & 1) + (x_parity & 1))]
}

/// Decodes one hash character into `(x_parity, y_parity)`.
#[inline]
pub fn decode_quadrant(digit: char) -> Result<(u8, u8), QuadHashError> {
    let code = match digit {
        '0' => 0,
        '1' => 1,
        '2' => 2,
        '3' => 3,
        other => return Err(QuadHashError::InvalidHashCharacter(other)),
    };
    let x_parity = code % 2;
    let y_parity = (code - x_parity) / 2;
    Ok((x_parity, y_parity))
}

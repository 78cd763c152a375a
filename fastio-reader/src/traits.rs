use fastio_common::{FastIoError, Position, Result, TextSlice};

/// A type that can be parsed from a single whitespace-delimited token.
///
/// This is the seam [`FastReader::next`](crate::FastReader::next) and
/// [`FastReader::next_vec`](crate::FastReader::next_vec) are generic over;
/// implement it to read your own types straight off the input.
pub trait FromToken: Sized {
    /// Parses `token`, which started at `position` in the input.
    fn from_token(token: TextSlice, position: Position) -> Result<Self>;
}

macro_rules! impl_from_token_for_numbers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromToken for $ty {
                #[inline]
                fn from_token(token: TextSlice, position: Position) -> Result<Self> {
                    token.parse::<$ty>().map_err(|_| FastIoError::MalformedNumber {
                        kind: stringify!($ty),
                        token: token.into_string(),
                        position,
                    })
                }
            }
        )*
    };
}

impl_from_token_for_numbers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Exactly `true` or `false`.
impl FromToken for bool {
    fn from_token(token: TextSlice, position: Position) -> Result<Self> {
        token.parse::<bool>().map_err(|_| FastIoError::MalformedNumber {
            kind: "bool",
            token: token.into_string(),
            position,
        })
    }
}

/// The first character of the token.
impl FromToken for char {
    fn from_token(token: TextSlice, _position: Position) -> Result<Self> {
        token.chars().next().ok_or(FastIoError::EmptyToken)
    }
}

impl FromToken for String {
    fn from_token(token: TextSlice, _position: Position) -> Result<Self> {
        Ok(token.into_string())
    }
}

impl FromToken for TextSlice {
    fn from_token(token: TextSlice, _position: Position) -> Result<Self> {
        Ok(token)
    }
}

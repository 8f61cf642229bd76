//! Fixed-capacity line buffers.
//!
//! [`LineBuf<N>`] is an explicit length-and-buffer representation of a line
//! of text: `N` bytes of fixed storage plus a length field. Unlike a
//! C-style string there is no terminator byte, so the buffer may hold any
//! byte values, including embedded `\0` and control characters, and its
//! length is always known without scanning.
//!
//! The type exists to back the interactive reversal path: read a line into
//! a fixed buffer, reverse it in place, display the result. Two boundary
//! behaviors are deliberate and documented rather than incidental:
//!
//! 1. **Truncation**: [`LineBuf::truncating`] and [`LineBuf::read_line`]
//!    silently keep only the first `N` bytes of over-length input, the same
//!    way a fixed `fgets` buffer would. The fallible constructors
//!    ([`TryFrom<&str>`][TryFrom], [`FromStr`]) reject over-length input
//!    with [`LineTooLongError`] instead, before any bytes are copied.
//! 2. **Line-ending strip**: [`LineBuf::read_line`] removes at most one
//!    trailing line ending from the bytes read, treating `"\r\n"` as a
//!    single ending.
//!
//! ## Examples
//!
//! ```
//! use flip::LineBuf;
//!
//! # fn main() -> Result<(), flip::LineTooLongError> {
//! let mut line: LineBuf<100> = "Hello World".parse()?;
//! line.reverse();
//! assert_eq!(line.as_str(), Ok("dlroW olleH"));
//! # Ok(())
//! # }
//! ```

use alloc::borrow::Borrow;
use alloc::borrow::BorrowMut;
use alloc::string::String;
use core::cmp::Ordering;
use core::convert::AsMut;
use core::convert::AsRef;
use core::convert::TryFrom;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Display;
use core::fmt::Formatter;
use core::hash::Hash;
use core::hash::Hasher;
use core::ops::Deref;
use core::ops::DerefMut;
use core::str;
use core::str::FromStr;

use crate::reverse::Reverse;
use crate::reverse::reverse;
use crate::reverse::reverse_recursive;

/// Error type returned when attempting to create a [`LineBuf`] from text
/// that exceeds the buffer's fixed capacity.
///
/// Only the checked constructors return this; the truncating constructors
/// ([`LineBuf::truncating`], [`LineBuf::read_line`]) discard the excess
/// instead.
///
/// # Example
///
/// ```rust
/// # use flip::line_buf::*;
/// # use core::convert::TryFrom;
/// # fn main() {
/// let result = LineBuf::<8>::try_from("more than eight bytes");
///
/// assert!(result.is_err());
/// assert!(matches!(result, Err(LineTooLongError)));
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LineTooLongError;

impl Display for LineTooLongError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str("input line exceeds the buffer's fixed capacity")
  }
}

impl core::error::Error for LineTooLongError {}

#[derive(Clone, Copy)]
#[cfg_attr(feature = "constructors", derive(derive_more::Constructor))]
#[cfg_attr(
  feature = "index",
  derive(derive_more::Index, derive_more::IndexMut)
)]
/// A line of bytes in fixed storage with an explicit length.
///
/// `LineBuf<N>` holds up to `N` bytes inline with no heap allocation and no
/// terminator sentinel. The length is fixed for the duration of any
/// reversal call; reversal exchanges positions, it never inserts or
/// removes.
///
/// The buffer is byte-oriented. Reversing the bytes of multi-byte UTF-8
/// text produces a byte sequence that is no longer valid UTF-8, so the
/// string view ([`LineBuf::as_str`]) is fallible rather than assumed.
///
/// # Example
///
/// ```rust
/// # use flip::line_buf::*;
/// # use core::convert::TryFrom;
///
/// # fn main() -> Result<(), LineTooLongError> {
/// let line = LineBuf::<100>::try_from("Programming")?;
/// assert_eq!(line.len(), 11);
/// assert_eq!(line.capacity(), 100);
///
/// let mut reversed = line;
/// reversed.reverse();
/// assert_eq!(reversed.as_str(), Ok("gnimmargorP"));
/// // the original copy is untouched
/// assert_eq!(line.as_str(), Ok("Programming"));
/// # Ok(())
/// # }
/// ```
pub struct LineBuf<const N: usize> {
  #[cfg_attr(feature = "index", index)]
  #[cfg_attr(feature = "index", index_mut)]
  pub(crate) buf: [u8; N],
  pub(crate) len: usize,
}

impl<const N: usize> LineBuf<N> {
  /// Creates a new `LineBuf` from raw parts.
  #[cfg(not(feature = "constructors"))]
  pub const fn new(buf: [u8; N], len: usize) -> Self {
    Self { buf, len }
  }

  /// Returns the number of bytes currently stored.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns whether the buffer is empty.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the fixed capacity in bytes.
  #[inline]
  pub const fn capacity(&self) -> usize {
    N
  }

  /// Returns a reference to the stored bytes.
  #[inline]
  pub fn as_bytes(&self) -> &[u8] {
    &self.buf[..self.len]
  }

  /// Returns a mutable reference to the stored bytes.
  #[inline]
  pub fn as_bytes_mut(&mut self) -> &mut [u8] {
    &mut self.buf[..self.len]
  }

  /// Returns the contents as a string slice, failing if the bytes are not
  /// valid UTF-8 (as after byte-reversing multi-byte text).
  #[inline]
  pub fn as_str(&self) -> Result<&str, str::Utf8Error> {
    str::from_utf8(self.as_bytes())
  }

  /// Creates a `LineBuf` holding at most the first `N` bytes of `s`.
  ///
  /// Over-length input is silently truncated, byte-wise: if the cut falls
  /// inside a multi-byte UTF-8 character, the partial bytes are kept and
  /// [`LineBuf::as_str`] will report the buffer as non-UTF-8. Callers that
  /// want rejection instead of truncation should use [`TryFrom<&str>`].
  pub fn truncating(s: &str) -> Self {
    let src = s.as_bytes();
    let len = src.len().min(N);
    let mut buf = [0u8; N];
    buf[..len].copy_from_slice(&src[..len]);
    Self { buf, len }
  }

  /// Reverses the stored bytes in place using the iterative two-cursor
  /// exchange. Empty and single-byte buffers are left unchanged.
  #[inline]
  pub fn reverse(&mut self) {
    reverse(self.as_bytes_mut());
  }

  /// Reverses the stored bytes in place using the recursive variant.
  ///
  /// Identical result to [`LineBuf::reverse`]; uses one call frame per
  /// exchange, which the fixed capacity `N` keeps bounded.
  #[inline]
  pub fn reverse_recursive(&mut self) {
    reverse_recursive(self.as_bytes_mut());
  }
}

#[cfg(any(test, feature = "std"))]
impl<const N: usize> LineBuf<N> {
  /// Reads one line from `reader` into a fresh buffer.
  ///
  /// At most one trailing line ending is stripped from the bytes read
  /// (`"\n"`, or `"\r\n"` treated as a single ending); interior line-ending
  /// characters are kept as-is. Input longer than `N` bytes is silently
  /// truncated, and the remainder of the line is consumed without being
  /// buffered, so the next call starts at the following line and memory
  /// usage stays at `N` bytes plus a line ending regardless of line
  /// length. At end of input the returned buffer is empty.
  ///
  /// # Example
  ///
  /// ```rust
  /// use std::io::Cursor;
  ///
  /// use flip::LineBuf;
  ///
  /// # fn main() -> std::io::Result<()> {
  /// let mut input = Cursor::new("Hello World\n");
  /// let mut line = LineBuf::<100>::read_line(&mut input)?;
  /// line.reverse();
  /// assert_eq!(line.as_str(), Ok("dlroW olleH"));
  /// # Ok(())
  /// # }
  /// ```
  pub fn read_line<R: std::io::BufRead>(
    reader: &mut R,
  ) -> std::io::Result<Self> {
    use alloc::vec::Vec;
    use std::io::BufRead;
    use std::io::Read;

    // N payload bytes plus room for a CRLF ending
    let mut raw = Vec::with_capacity(N + 2);
    {
      let mut limited = reader.by_ref().take(N as u64 + 2);
      limited.read_until(b'\n', &mut raw)?;
    }
    if raw.last() != Some(&b'\n') {
      // hit the limit mid-line; skip to the next line without buffering
      loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
          break;
        }
        match available.iter().position(|&b| b == b'\n') {
          Some(pos) => {
            reader.consume(pos + 1);
            break;
          }
          None => {
            let n = available.len();
            reader.consume(n);
          }
        }
      }
    } else {
      raw.pop();
      if raw.last() == Some(&b'\r') {
        raw.pop();
      }
    }
    let len = raw.len().min(N);
    let mut buf = [0u8; N];
    buf[..len].copy_from_slice(&raw[..len]);
    Ok(Self { buf, len })
  }
}

impl<const N: usize> Reverse for LineBuf<N> {
  #[inline(always)]
  fn reverse(&mut self) {
    reverse(self.as_bytes_mut());
  }
}

impl<const N: usize> Default for LineBuf<N> {
  #[inline(always)]
  fn default() -> Self {
    Self {
      buf: [0u8; N],
      len: 0,
    }
  }
}

impl<const N: usize> Debug for LineBuf<N> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_struct("LineBuf")
      .field("buf", &self.as_bytes())
      .field("len", &self.len)
      .finish()
  }
}

impl<const N: usize> Display for LineBuf<N> {
  /// Displays the contents lossily: any non-UTF-8 byte runs are rendered
  /// as U+FFFD replacement characters.
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
  }
}

impl<const N: usize> Deref for LineBuf<N> {
  type Target = [u8];

  #[inline(always)]
  fn deref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl<const N: usize> DerefMut for LineBuf<N> {
  #[inline(always)]
  fn deref_mut(&mut self) -> &mut [u8] {
    self.as_bytes_mut()
  }
}

impl<const N: usize> AsRef<[u8]> for LineBuf<N> {
  #[inline(always)]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl<const N: usize> AsMut<[u8]> for LineBuf<N> {
  #[inline(always)]
  fn as_mut(&mut self) -> &mut [u8] {
    self.as_bytes_mut()
  }
}

impl<const N: usize> Borrow<[u8]> for LineBuf<N> {
  #[inline(always)]
  fn borrow(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl<const N: usize> BorrowMut<[u8]> for LineBuf<N> {
  #[inline(always)]
  fn borrow_mut(&mut self) -> &mut [u8] {
    self.as_bytes_mut()
  }
}

impl<const N: usize> TryFrom<&str> for LineBuf<N> {
  type Error = LineTooLongError;

  #[inline(always)]
  fn try_from(s: &str) -> Result<LineBuf<N>, LineTooLongError> {
    if s.len() > N {
      return Err(LineTooLongError);
    }
    Ok(Self::truncating(s))
  }
}

impl<const N: usize> FromStr for LineBuf<N> {
  type Err = LineTooLongError;

  #[inline(always)]
  fn from_str(s: &str) -> Result<LineBuf<N>, LineTooLongError> {
    LineBuf::try_from(s)
  }
}

impl<const N: usize> From<&LineBuf<N>> for String {
  /// Lossy conversion, per the [`Display`] impl.
  #[inline(always)]
  fn from(line: &LineBuf<N>) -> Self {
    String::from_utf8_lossy(line.as_bytes()).into_owned()
  }
}

impl<const N: usize> Hash for LineBuf<N> {
  #[inline(always)]
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.as_bytes().hash(state);
  }
}

impl<const N: usize> PartialEq for LineBuf<N> {
  #[inline(always)]
  fn eq(&self, other: &Self) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<const N: usize> Eq for LineBuf<N> {}

impl<const N: usize> PartialEq<[u8]> for LineBuf<N> {
  #[inline(always)]
  fn eq(&self, other: &[u8]) -> bool {
    self.as_bytes() == other
  }
}

impl<const N: usize> PartialEq<&[u8]> for LineBuf<N> {
  #[inline(always)]
  fn eq(&self, other: &&[u8]) -> bool {
    self.as_bytes() == *other
  }
}

impl<const N: usize> PartialEq<str> for LineBuf<N> {
  #[inline(always)]
  fn eq(&self, other: &str) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<const N: usize> PartialEq<&str> for LineBuf<N> {
  #[inline(always)]
  fn eq(&self, other: &&str) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<const N: usize> PartialEq<LineBuf<N>> for str {
  #[inline(always)]
  fn eq(&self, other: &LineBuf<N>) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<const N: usize> PartialEq<LineBuf<N>> for &str {
  #[inline(always)]
  fn eq(&self, other: &LineBuf<N>) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<const N: usize> PartialOrd for LineBuf<N> {
  #[inline(always)]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<const N: usize> Ord for LineBuf<N> {
  #[inline(always)]
  fn cmp(&self, other: &Self) -> Ordering {
    self.as_bytes().cmp(other.as_bytes())
  }
}

#[cfg(feature = "serde")]
mod serde_impl {
  use super::*;

  impl<const N: usize> serde::Serialize for LineBuf<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: serde::Serializer,
    {
      match self.as_str() {
        Ok(text) => serializer.serialize_str(text),
        Err(_) => serializer.serialize_bytes(self.as_bytes()),
      }
    }
  }

  struct LineBufVisitor<const N: usize>;

  impl<'de, const N: usize> serde::de::Visitor<'de> for LineBufVisitor<N> {
    type Value = LineBuf<N>;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
      write!(f, "a string or byte sequence of at most {} bytes", N)
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
      E: serde::de::Error,
    {
      self.visit_bytes(v.as_bytes())
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
      E: serde::de::Error,
    {
      if v.len() > N {
        return Err(E::custom(LineTooLongError));
      }
      let mut buf = [0u8; N];
      buf[..v.len()].copy_from_slice(v);
      Ok(LineBuf { buf, len: v.len() })
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
      A: serde::de::SeqAccess<'de>,
    {
      let mut buf = [0u8; N];
      let mut len = 0;
      while let Some(byte) = seq.next_element::<u8>()? {
        if len >= N {
          return Err(serde::de::Error::custom(LineTooLongError));
        }
        buf[len] = byte;
        len += 1;
      }
      Ok(LineBuf { buf, len })
    }
  }

  impl<'de, const N: usize> serde::Deserialize<'de> for LineBuf<N> {
    /// Accepts both shapes the [`serde::Serialize`] impl produces: a
    /// string for valid UTF-8 contents, or a byte sequence otherwise.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: serde::Deserializer<'de>,
    {
      deserializer.deserialize_bytes(LineBufVisitor::<N>)
    }
  }
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::*;

  #[test]
  fn try_from_within_capacity() {
    let line = LineBuf::<100>::try_from("Hello World");
    assert!(line.is_ok());
    let line = line.unwrap();
    assert_eq!(line.len(), 11);
    assert_eq!(line.capacity(), 100);
    assert_eq!(line, "Hello World");
  }

  #[test]
  fn try_from_fits_exact_capacity() {
    let line = LineBuf::<5>::try_from("01234");
    assert!(line.is_ok());
    assert_eq!(line.unwrap().as_str(), Ok("01234"));
  }

  #[test]
  fn try_from_rejects_over_length() {
    let err = LineBuf::<5>::try_from("012345");
    assert!(err.is_err());
    assert!(matches!(err, Err(LineTooLongError)));
  }

  #[test]
  fn truncating_keeps_first_capacity_bytes() {
    let line = LineBuf::<5>::truncating("0123456789");
    assert_eq!(line.len(), 5);
    assert_eq!(line.as_str(), Ok("01234"));
  }

  #[test]
  fn truncating_may_split_a_multibyte_character() {
    // 'é' is two bytes; a 3-byte buffer cuts through the second one
    let line = LineBuf::<3>::truncating("aaé");
    assert_eq!(line.len(), 3);
    assert!(line.as_str().is_err());
  }

  #[test]
  fn reverse_round_trip_through_buffer() {
    let mut line: LineBuf<100> = "Hello World".parse().unwrap();
    line.reverse();
    assert_eq!(line.as_str(), Ok("dlroW olleH"));
    line.reverse();
    assert_eq!(line.as_str(), Ok("Hello World"));
  }

  #[test]
  fn recursive_reverse_matches_iterative() {
    let mut iterative: LineBuf<100> = "a, b!".parse().unwrap();
    let mut recursive = iterative;
    iterative.reverse();
    recursive.reverse_recursive();
    assert_eq!(iterative, recursive);
    assert_eq!(iterative.as_str(), Ok("!b ,a"));
  }

  #[test]
  fn reverse_trait_applies_to_line_buffers() {
    fn flip_generic<S: Reverse + ?Sized>(seq: &mut S) {
      seq.reverse();
    }
    let mut line: LineBuf<16> = "a, b!".parse().unwrap();
    flip_generic(&mut line);
    assert_eq!(line.as_str(), Ok("!b ,a"));
  }

  #[test]
  fn empty_and_single_byte_buffers() {
    let mut empty = LineBuf::<8>::default();
    assert!(empty.is_empty());
    empty.reverse();
    assert_eq!(empty.as_str(), Ok(""));

    let mut single: LineBuf<8> = "A".parse().unwrap();
    single.reverse();
    assert_eq!(single.as_str(), Ok("A"));
  }

  #[test]
  fn read_line_strips_one_newline() {
    let mut input = Cursor::new("Hello World\nsecond line\n");
    let line = LineBuf::<100>::read_line(&mut input).unwrap();
    assert_eq!(line, "Hello World");
    let line = LineBuf::<100>::read_line(&mut input).unwrap();
    assert_eq!(line, "second line");
  }

  #[test]
  fn read_line_treats_crlf_as_one_ending() {
    let mut input = Cursor::new("Hello World\r\n");
    let line = LineBuf::<100>::read_line(&mut input).unwrap();
    assert_eq!(line, "Hello World");
  }

  #[test]
  fn read_line_without_trailing_newline() {
    let mut input = Cursor::new("no newline");
    let line = LineBuf::<100>::read_line(&mut input).unwrap();
    assert_eq!(line, "no newline");
  }

  #[test]
  fn read_line_keeps_interior_carriage_returns() {
    let mut input = Cursor::new("a\rb\n");
    let line = LineBuf::<100>::read_line(&mut input).unwrap();
    assert_eq!(line, "a\rb");
  }

  #[test]
  fn read_line_truncates_over_length_input() {
    let mut input = Cursor::new("0123456789\n");
    let line = LineBuf::<4>::read_line(&mut input).unwrap();
    assert_eq!(line, "0123");
  }

  #[test]
  fn read_line_discards_remainder_of_long_line() {
    let mut input = Cursor::new("0123456789\nnext\n");
    let line = LineBuf::<4>::read_line(&mut input).unwrap();
    assert_eq!(line, "0123");
    let line = LineBuf::<4>::read_line(&mut input).unwrap();
    assert_eq!(line, "next");
  }

  #[test]
  fn read_line_long_line_with_crlf_ending() {
    let mut input = Cursor::new("0123456789\r\nnext\r\n");
    let line = LineBuf::<4>::read_line(&mut input).unwrap();
    assert_eq!(line, "0123");
    let line = LineBuf::<4>::read_line(&mut input).unwrap();
    assert_eq!(line, "next");
  }

  #[test]
  fn read_line_at_end_of_input_is_empty() {
    let mut input = Cursor::new("");
    let line = LineBuf::<100>::read_line(&mut input).unwrap();
    assert!(line.is_empty());
  }

  #[test]
  fn arbitrary_bytes_survive_reversal() {
    let mut line = LineBuf::<8>::new(*b"\0a\tb\0\0\0\0", 5);
    line.reverse();
    assert_eq!(line.as_bytes(), b"\0b\ta\0");
    line.reverse();
    assert_eq!(line.as_bytes(), b"\0a\tb\0");
  }

  #[test]
  fn display_is_lossy_for_invalid_utf8() {
    let mut line: LineBuf<8> = "aé".parse().unwrap();
    line.reverse();
    assert!(line.as_str().is_err());
    let shown = line.to_string();
    assert!(shown.contains('\u{FFFD}'));
  }

  #[test]
  fn equality_ordering_and_deref() {
    let a: LineBuf<16> = "apple".parse().unwrap();
    let b: LineBuf<16> = "banana".parse().unwrap();
    assert_eq!(a, "apple");
    assert_eq!("apple", a);
    assert_ne!(a, b);
    assert!(a < b);
    assert_eq!(&a[..a.len()], b"apple");
    assert_eq!(a.iter().count(), 5);
  }

  #[cfg(feature = "serde")]
  mod serde_tests {
    use super::*;

    #[test]
    fn serialize_and_deserialize_line() {
      let line: LineBuf<100> = "Hello World".parse().unwrap();
      let json = serde_json::to_string(&line).unwrap();
      assert_eq!(json, "\"Hello World\"");
      let de: LineBuf<100> = serde_json::from_str(&json).unwrap();
      assert_eq!(de, line);
    }

    #[test]
    fn deserialize_rejects_over_length_line() {
      let de: Result<LineBuf<4>, _> = serde_json::from_str("\"too long\"");
      assert!(de.is_err());
    }

    #[test]
    fn non_utf8_contents_round_trip_as_bytes() {
      let mut line: LineBuf<8> = "aé".parse().unwrap();
      line.reverse();
      assert!(line.as_str().is_err());
      let json = serde_json::to_string(&line).unwrap();
      let back: LineBuf<8> = serde_json::from_str(&json).unwrap();
      assert_eq!(back, line);
    }

    #[test]
    fn deserialize_rejects_over_length_byte_sequence() {
      let de: Result<LineBuf<2>, _> = serde_json::from_str("[1, 2, 3]");
      assert!(de.is_err());
    }
  }
}

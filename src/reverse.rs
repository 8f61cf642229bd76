//! In-place sequence reversal.
//!
//! The two entry points here do the same thing two ways: walk a pair of
//! cursors inward from both ends of a slice, exchanging elements until the
//! cursors meet. [`reverse()`] uses an explicit loop and O(1) auxiliary space;
//! [`reverse_recursive()`] expresses the identical exchange as recursion and
//! trades that for O(n) call-stack depth.
//!
//! Both operate on `&mut [T]` for any element type. A slice carries its own
//! length, so there is no terminator byte to protect and no constraint on
//! element values; bytes, `char`s, and arbitrary values all work.
//!
//! ## Examples
//!
//! ```
//! use flip::reverse;
//!
//! let mut greeting = *b"Hello World";
//! reverse(&mut greeting);
//! assert_eq!(&greeting, b"dlroW olleH");
//! ```

/// Reverses a slice in place by exchanging elements from both ends.
///
/// Maintains two cursors, `lo` starting at the first position and `hi` at
/// the last. While `lo < hi`, the elements at the two cursors are swapped
/// and the cursors step toward the middle. Runs in O(n) time with O(1)
/// auxiliary space and performs no allocation.
///
/// Empty and single-element slices are valid inputs and perform zero
/// exchanges.
///
/// # Example
///
/// ```
/// use flip::reverse;
///
/// let mut word = ['r', 'u', 's', 't'];
/// reverse(&mut word);
/// assert_eq!(word, ['t', 's', 'u', 'r']);
///
/// let mut empty: [u8; 0] = [];
/// reverse(&mut empty);
/// assert!(empty.is_empty());
/// ```
pub fn reverse<T>(seq: &mut [T]) {
  let mut hi = match seq.len() {
    0 => return,
    n => n - 1,
  };
  let mut lo = 0;
  while lo < hi {
    seq.swap(lo, hi);
    lo += 1;
    hi -= 1;
  }
}

/// Reverses a slice in place using recursion instead of a loop.
///
/// Equivalent to [`reverse()`] for every input: each recursion step exchanges
/// the elements at the `lo` and `hi` cursors and recurses on the interior
/// `(lo + 1, hi - 1)` range, with `lo >= hi` as the base case.
///
/// This variant consumes one call frame per exchange, so its maximum input
/// length is bounded by the available call-stack depth (roughly n/2 frames
/// for a slice of length n). Prefer [`reverse()`] for inputs of unbounded
/// size; this form exists because the exchange structure is sometimes
/// clearer written recursively.
///
/// # Example
///
/// ```
/// use flip::reverse_recursive;
///
/// let mut name = *b"Programming";
/// reverse_recursive(&mut name);
/// assert_eq!(&name, b"gnimmargorP");
/// ```
pub fn reverse_recursive<T>(seq: &mut [T]) {
  fn step<T>(seq: &mut [T], lo: usize, hi: usize) {
    if lo >= hi {
      return;
    }
    seq.swap(lo, hi);
    step(seq, lo + 1, hi - 1);
  }
  if let Some(hi) = seq.len().checked_sub(1) {
    step(seq, 0, hi);
  }
}

/// In-place reversal as a trait bound.
///
/// The free functions cover direct calls; this trait is the seam for
/// generic code that wants `seq.reverse()` on anything reversible. Note
/// that for bare slices the standard library's inherent `reverse` shadows
/// the trait method in method-call position, so the trait matters where
/// `Reverse` appears as a bound rather than as the receiver's concrete
/// type.
///
/// # Example
///
/// ```
/// use flip::Reverse;
///
/// fn flip_in_place<S: Reverse + ?Sized>(seq: &mut S) {
///   seq.reverse();
/// }
///
/// let mut word = ['r', 'u', 's', 't'];
/// flip_in_place(&mut word[..]);
/// assert_eq!(word, ['t', 's', 'u', 'r']);
/// ```
pub trait Reverse {
  /// Reverses the contents in place.
  fn reverse(&mut self);
}

impl<T> Reverse for [T] {
  #[inline]
  fn reverse(&mut self) {
    reverse(self);
  }
}

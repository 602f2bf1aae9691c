/*!
A fixed length vector of bits, packed into words.

Each [literal](crate::structures::literal) caches the rows of a dataset it is satisfied on as bits, and the bits of clauses and formulas are obtained by conjunction and disjunction of these.

```rust
# use dnf_fit::generic::bits::Bits;
let mut a = Bits::zeros(70);
a.set(3, true);
a.set(65, true);

let mut b = Bits::ones(70);
b.set(3, false);

b.and_assign(&a);
assert_eq!(b.iter_ones().collect::<Vec<_>>(), vec![65]);
assert_eq!(b.count_ones(), 1);
```

Bits beyond the length of the vector are kept unset, and so equality and counts are exact.
*/

type Word = u64;

const WORD_BITS: usize = Word::BITS as usize;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Bits {
    words: Vec<Word>,
    len: usize,
}

impl Bits {
    /// A vector of `len` unset bits.
    pub fn zeros(len: usize) -> Self {
        Bits {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// A vector of `len` set bits.
    pub fn ones(len: usize) -> Self {
        let mut bits = Bits {
            words: vec![Word::MAX; len.div_ceil(WORD_BITS)],
            len,
        };
        bits.clear_tail();
        bits
    }

    /// A vector with bit *i* set if and only if `f(i)`.
    pub fn from_fn(len: usize, mut f: impl FnMut(usize) -> bool) -> Self {
        let mut bits = Bits::zeros(len);
        for index in 0..len {
            if f(index) {
                bits.words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
            }
        }
        bits
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The value of the bit at `index`.
    ///
    /// # Panics
    /// If `index` is not less than the length of the vector.
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len, "bit {index} of {}", self.len);
        self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    /// Sets the bit at `index` to `value`.
    ///
    /// # Panics
    /// If `index` is not less than the length of the vector.
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < self.len, "bit {index} of {}", self.len);
        let mask = 1 << (index % WORD_BITS);
        match value {
            true => self.words[index / WORD_BITS] |= mask,
            false => self.words[index / WORD_BITS] &= !mask,
        }
    }

    /// Conjunction, in place.
    ///
    /// # Panics
    /// If the vectors differ in length.
    pub fn and_assign(&mut self, other: &Bits) {
        assert_eq!(self.len, other.len);
        for (word, other_word) in self.words.iter_mut().zip(&other.words) {
            *word &= other_word;
        }
    }

    /// Disjunction, in place.
    ///
    /// # Panics
    /// If the vectors differ in length.
    pub fn or_assign(&mut self, other: &Bits) {
        assert_eq!(self.len, other.len);
        for (word, other_word) in self.words.iter_mut().zip(&other.words) {
            *word |= other_word;
        }
    }

    /// The number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// An iterator over the indices of set bits, in increasing order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(word_index, &word)| {
            let mut remaining = word;
            std::iter::from_fn(move || match remaining {
                0 => None,
                _ => {
                    let offset = remaining.trailing_zeros() as usize;
                    remaining &= remaining - 1;
                    Some(word_index * WORD_BITS + offset)
                }
            })
        })
    }

    /// An iterator over all bits, in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|index| self.get(index))
    }

    fn clear_tail(&mut self) {
        let used = self.len % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1 << used) - 1;
            }
        }
    }
}

impl std::fmt::Display for Bits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/*!
Relations between a feature value and a constant.

A relation is a non-empty subset of {less, equal, greater}, and a value stands in the relation to a constant when the ordering of the value against the constant is a member of the subset.
The six standard comparisons are given as constants.

```rust
# use dnf_fit::structures::relation::Relation;
assert!(Relation::LE.test(2, 3));
assert!(Relation::LE.test(3, 3));
assert!(!Relation::LE.test(4, 3));

assert!(Relation::NE.test(4, 3));
assert_eq!(Relation::NE.to_string(), "!=");
assert_eq!("≥".parse::<Relation>(), Ok(Relation::GE));
```
*/

use std::{cmp::Ordering, str::FromStr};

use crate::data::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Relation(u8);

impl Relation {
    const LESS: u8 = 0b001;
    const EQUAL: u8 = 0b010;
    const GREATER: u8 = 0b100;

    pub const LT: Relation = Relation(Self::LESS);
    pub const EQ: Relation = Relation(Self::EQUAL);
    pub const GT: Relation = Relation(Self::GREATER);
    pub const NE: Relation = Relation(Self::LESS | Self::GREATER);
    pub const LE: Relation = Relation(Self::LESS | Self::EQUAL);
    pub const GE: Relation = Relation(Self::GREATER | Self::EQUAL);

    /// Each of the six standard comparisons, in the order used when generating a catalog.
    pub const ALL: [Relation; 6] = [
        Relation::LT,
        Relation::EQ,
        Relation::GT,
        Relation::NE,
        Relation::LE,
        Relation::GE,
    ];

    /// The relation made of those orderings marked true, if any are.
    pub fn from_orderings(less: bool, equal: bool, greater: bool) -> Option<Self> {
        let bits = (less as u8) * Self::LESS | (equal as u8) * Self::EQUAL | (greater as u8) * Self::GREATER;
        match bits {
            0 => None,
            _ => Some(Relation(bits)),
        }
    }

    pub fn contains(&self, ordering: Ordering) -> bool {
        let bit = match ordering {
            Ordering::Less => Self::LESS,
            Ordering::Equal => Self::EQUAL,
            Ordering::Greater => Self::GREATER,
        };
        self.0 & bit != 0
    }

    /// Whether `value` stands in the relation to `constant`.
    pub fn test(&self, value: Value, constant: Value) -> bool {
        self.contains(value.cmp(&constant))
    }

    fn symbol(&self) -> &'static str {
        match self.0 {
            Self::LESS => "<",
            Self::EQUAL => "=",
            Self::GREATER => ">",
            0b101 => "!=",
            0b011 => "<=",
            0b110 => ">=",
            _ => "*",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Relation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(Self::LT),
            "=" | "==" => Ok(Self::EQ),
            ">" => Ok(Self::GT),
            "!=" | "≠" => Ok(Self::NE),
            "<=" | "≤" => Ok(Self::LE),
            ">=" | "≥" => Ok(Self::GE),
            "*" => Ok(Relation(Self::LESS | Self::EQUAL | Self::GREATER)),
            _unknown_string => Err(()),
        }
    }
}

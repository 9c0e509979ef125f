use std::cmp::Ordering;
use std::fmt;

/// Where one temporal value sits relative to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Before,
    After,
    Equal,
}

impl Comparison {
    pub fn is_before(self) -> bool {
        self == Comparison::Before
    }

    pub fn is_after(self) -> bool {
        self == Comparison::After
    }

    pub fn is_equal(self) -> bool {
        self == Comparison::Equal
    }

    /// The comparison seen from the other side
    pub fn reverse(self) -> Self {
        match self {
            Comparison::Before => Comparison::After,
            Comparison::After => Comparison::Before,
            Comparison::Equal => Comparison::Equal,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Comparison::Before,
            Ordering::Greater => Comparison::After,
            Ordering::Equal => Comparison::Equal,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Comparison::Before => "before",
            Comparison::After => "after",
            Comparison::Equal => "equal",
        };
        f.write_str(label)
    }
}

/// Compare two values of the same temporal type.
pub fn compare<T: Ord>(a: &T, b: &T) -> Comparison {
    a.cmp(b).into()
}

//! Link count value object.

/// Total number of stored links at the time of the query.
///
/// Transient: never persisted and carries no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Count {
    pub count: i64,
}

impl Count {
    pub fn new(count: i64) -> Self {
        Self { count }
    }
}

impl From<i64> for Count {
    fn from(count: i64) -> Self {
        Self::new(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_from_integer() {
        let count = Count::from(42);
        assert_eq!(count.count, 42);
        assert_eq!(count, Count::new(42));
    }
}

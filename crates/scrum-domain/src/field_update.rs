/// Represents a field update operation for partial updates
///
/// This type provides a clear, three-state pattern for updating optional fields:
/// - `NoChange`: Field keeps its existing value
/// - `Set(value)`: Field is updated to the provided value
/// - `Clear`: Field is cleared (set to None)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Do not modify this field (keep existing value)
    NoChange,
    /// Set the field to the provided value
    Set(T),
    /// Clear the field (set to None)
    Clear,
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::NoChange
    }
}

impl<T> FieldUpdate<T> {
    /// Apply this update to an optional field
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => *field = Some(value),
            FieldUpdate::Clear => *field = None,
        }
    }

    /// Check if this represents a change (not NoChange)
    pub fn is_change(&self) -> bool {
        !matches!(self, FieldUpdate::NoChange)
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    /// `Some(value)` becomes `Set(value)`, `None` becomes `Clear`.
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Clear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_to() {
        let mut field = Some("old".to_string());

        FieldUpdate::NoChange.apply_to(&mut field);
        assert_eq!(field, Some("old".to_string()));

        FieldUpdate::Set("new".to_string()).apply_to(&mut field);
        assert_eq!(field, Some("new".to_string()));

        FieldUpdate::<String>::Clear.apply_to(&mut field);
        assert_eq!(field, None);
    }

    #[test]
    fn test_is_change() {
        assert!(!FieldUpdate::<u32>::NoChange.is_change());
        assert!(FieldUpdate::Set(1u32).is_change());
        assert!(FieldUpdate::<u32>::Clear.is_change());
    }
}

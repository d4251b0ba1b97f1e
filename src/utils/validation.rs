use crate::domain::model::ProductId;
use crate::utils::error::{CartError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CartError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_price(field_name: &str, price: f64) -> Result<()> {
    if !price.is_finite() {
        return Err(CartError::InvalidValue {
            field: field_name.to_string(),
            value: price.to_string(),
            reason: "Price must be a finite number".to_string(),
        });
    }
    if price < 0.0 {
        return Err(CartError::InvalidValue {
            field: field_name.to_string(),
            value: price.to_string(),
            reason: "Price cannot be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_ids<I>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = ProductId>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CartError::InvalidValue {
                field: field_name.to_string(),
                value: id.to_string(),
                reason: "Product id appears more than once".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Producto 1").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price", 0.0).is_ok());
        assert!(validate_price("price", 19.99).is_ok());
        assert!(validate_price("price", -1.0).is_err());
        assert!(validate_price("price", f64::NAN).is_err());
        assert!(validate_price("price", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_unique_ids() {
        assert!(validate_unique_ids("products", [1, 2, 3]).is_ok());
        assert!(validate_unique_ids("products", Vec::new()).is_ok());

        match validate_unique_ids("products", [1, 2, 1]) {
            Err(CartError::InvalidValue { value, .. }) => assert_eq!(value, "1"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }
}

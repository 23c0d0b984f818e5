use hmt_quantity::{parse, Rational, Unit};

/// Builds an affine test unit from exact literals.
pub fn unit(id: &str, multiplier: &str, offset: &str, reference: &str, kind: &str) -> Unit {
    Unit {
        id: id.to_string(),
        uri: format!("http://qudt.org/vocab/unit/{id}"),
        ucum_code: id.to_string(),
        label: id.to_string(),
        quantity_kinds: vec![kind.to_string()],
        dimension: String::new(),
        multiplier: rational(multiplier),
        offset: rational(offset),
        reference_id: Some(reference.to_string()),
        logarithmic: false,
    }
}

pub fn rational(literal: &str) -> Rational {
    parse(literal).unwrap()
}

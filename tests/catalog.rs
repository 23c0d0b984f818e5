use std::sync::Arc;

use hmt_quantity::{
    convert, diagnostics::Level, parse, Catalog, CatalogCache, CatalogError, Numeric,
};

const CATALOG: &str = r#"{
  "K": {
    "uri": "http://qudt.org/vocab/unit/K",
    "ucumCode": "K",
    "label": "Kelvin",
    "quantityKind": ["ThermodynamicTemperature", "Temperature", "Temperature"],
    "dimension": "A0E0L0I0M0H1T0D0",
    "multiplier": 1,
    "offset": 0,
    "baseUnit": "K",
    "logarithmic": false
  },
  "DEG_C": {
    "uri": "http://qudt.org/vocab/unit/DEG_C",
    "ucumCode": "Cel",
    "label": "Degree Celsius",
    "quantityKind": ["Temperature"],
    "dimension": "A0E0L0I0M0H1T0D0",
    "multiplier": 1,
    "offset": 273.15,
    "baseUnit": "K",
    "logarithmic": false
  },
  "DEG_F": {
    "uri": "http://qudt.org/vocab/unit/DEG_F",
    "ucumCode": "[degF]",
    "label": "Degree Fahrenheit",
    "quantityKind": ["Temperature"],
    "dimension": "A0E0L0I0M0H1T0D0",
    "multiplier": "5/9",
    "offset": "45967/180",
    "baseUnit": "K",
    "logarithmic": false
  },
  "MicroGM": {
    "uri": "http://qudt.org/vocab/unit/MicroGM",
    "ucumCode": "µg",
    "label": "Microgram",
    "quantityKind": ["Mass"],
    "dimension": "A0E0L0I0M1H0T0D0",
    "multiplier": 1e-9,
    "offset": 0,
    "baseUnit": "KiloGM",
    "logarithmic": false
  },
  "B_SPL": {
    "uri": "http://qudt.org/vocab/unit/B_SPL",
    "ucumCode": "B[SPL]",
    "label": "Bel Sound Pressure Level",
    "quantityKind": ["SoundPressureLevel"],
    "dimension": "A0E0L0I0M0H0T0D0",
    "multiplier": 1,
    "offset": 0,
    "baseUnit": null,
    "logarithmic": true
  },
  "BROKEN": {
    "uri": "http://qudt.org/vocab/unit/BROKEN",
    "ucumCode": "broken",
    "label": "Missing its multiplier",
    "quantityKind": ["Mass"],
    "dimension": "A0E0L0I0M1H0T0D0",
    "offset": 0,
    "baseUnit": "KiloGM",
    "logarithmic": false
  },
  "NO_KIND": {
    "uri": "http://qudt.org/vocab/unit/NO_KIND",
    "ucumCode": "nokind",
    "label": "Carries no quantity kind",
    "quantityKind": [],
    "dimension": "A0E0L0I0M0H0T0D0",
    "multiplier": 1,
    "offset": 0,
    "baseUnit": null,
    "logarithmic": false
  }
}"#;

#[test]
fn resolves_records_and_converts_between_them() {
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let celsius = catalog.get("DEG_C").unwrap();
    let fahrenheit = catalog.get("DEG_F").unwrap();

    let boiling = convert(&Numeric::from("100"), celsius, fahrenheit).unwrap();
    assert_eq!(boiling.to_decimal_string(), "212");

    let freezing = convert(&Numeric::from("32"), fahrenheit, celsius).unwrap();
    assert_eq!(freezing.to_decimal_string(), "0");
}

#[test]
fn exact_fraction_literals_survive_resolution() {
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let fahrenheit = catalog.get("DEG_F").unwrap();
    assert_eq!(fahrenheit.multiplier, parse("5/9").unwrap());
    assert_eq!(fahrenheit.offset, parse("45967/180").unwrap());
}

#[test]
fn json_numbers_resolve_exactly_through_their_text_form() {
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let microgram = catalog.get("MicroGM").unwrap();
    assert_eq!(microgram.multiplier, parse("1/1000000000").unwrap());
    assert_eq!(catalog.get("DEG_C").unwrap().offset, parse("273.15").unwrap());
}

#[test]
fn quantity_kinds_are_sorted_and_deduplicated() {
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let kelvin = catalog.get("K").unwrap();
    assert_eq!(kelvin.quantity_kinds, ["Temperature", "ThermodynamicTemperature"]);
}

#[test]
fn malformed_records_are_skipped_with_diagnostics() {
    let catalog = Catalog::from_json(CATALOG).unwrap();
    assert!(catalog.get("BROKEN").is_none());
    assert!(catalog.get("NO_KIND").is_none());
    assert_eq!(catalog.len(), 5);

    let about_broken: Vec<_> =
        catalog.diagnostics().iter().filter(|d| d.unit == "BROKEN").collect();
    assert_eq!(about_broken.len(), 1);
    assert_eq!(about_broken[0].level, Level::Error);

    let about_no_kind: Vec<_> =
        catalog.diagnostics().iter().filter(|d| d.unit == "NO_KIND").collect();
    assert_eq!(about_no_kind.len(), 1);
    assert_eq!(about_no_kind[0].level, Level::Warning);
}

#[test]
fn micro_sign_spellings_find_the_same_unit() {
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let by_micro_sign = catalog.by_code("\u{00B5}g").unwrap();
    let by_greek_mu = catalog.by_code("\u{03BC}g").unwrap();
    assert_eq!(by_micro_sign.id, "MicroGM");
    assert_eq!(by_greek_mu.id, "MicroGM");
}

#[test]
fn logarithmic_units_resolve_but_never_convert() {
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let bel = catalog.get("B_SPL").unwrap();
    assert!(bel.logarithmic);
    assert!(!bel.is_convertible_to(catalog.get("K").unwrap()));
}

#[test]
fn unreadable_json_fails_the_load() {
    assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Json(_))));
}

#[test]
fn cache_memoizes_resolved_catalogs() {
    let mut cache = CatalogCache::new();
    let mut loads = 0;

    let first = cache
        .get_or_load("urn:test:catalog", || {
            loads += 1;
            Ok(CATALOG.to_string())
        })
        .unwrap();
    let second = cache
        .get_or_load("urn:test:catalog", || {
            loads += 1;
            Ok(CATALOG.to_string())
        })
        .unwrap();

    assert_eq!(loads, 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.units().count(), 5);
}

#[test]
fn failed_loads_are_not_cached() {
    let mut cache = CatalogCache::new();

    let offline = cache.get_or_load("urn:test:catalog", || {
        Err(CatalogError::Source("offline".to_string()))
    });
    assert!(offline.is_err());
    assert!(cache.get("urn:test:catalog").is_none());

    let recovered = cache.get_or_load("urn:test:catalog", || Ok(CATALOG.to_string()));
    assert!(recovered.is_ok());
    assert!(cache.get("urn:test:catalog").is_some());
}

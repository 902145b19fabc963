use wifi_taxonomy::{Database, FingerprintLookup, Oui};

#[test]
fn test_default_database_loads() {
    let _ = tracing_subscriber::fmt::try_init();

    let db = Database::default();
    assert!(!db.chipsets.is_empty());
    assert!(!db.models.is_empty());
}

#[test]
fn test_default_database_entries() {
    let db = Database::default();

    let record = db
        .chipset_by_signature(
            "wifi|probe:0,1,50,45,htcap:186e|assoc:0,1,50,48,221(0050f2,2),45,127,htcap:086c,htmcs:000000ff",
        )
        .expect("RTL8192CU entry");
    assert_eq!(record.chipset, "RTL8192CU");
    assert_eq!(record.model, None);

    let generic = "wifi|probe:0,1,50|assoc:0,1,50,48,221(0050f2,2)";
    let amazon = Oui::from_mac("28:ef:01").expect("oui");
    assert_eq!(db.model_by_oui(generic, amazon), Some("Kindle"));
    assert_eq!(db.model_by_oui(generic, Oui([0, 0, 1])), None);
}

#[test]
fn test_database_signatures_are_canonical() {
    // Every stored key must be its own canonical form, or lookups built
    // from downgraded signatures could never hit it.
    let db = Database::default();
    for key in db.chipsets.keys() {
        assert_eq!(&wifi_taxonomy::make_v2_signature(key), key, "non-canonical key: {key}");
    }
    for (key, _) in db.models.keys() {
        assert_eq!(&wifi_taxonomy::make_v2_signature(key), key, "non-canonical key: {key}");
    }
}

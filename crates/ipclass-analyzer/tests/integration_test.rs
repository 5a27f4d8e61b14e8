use ipclass_analyzer::{
    analyze, broadcast, classify, derive_prefix_len, resolve_mask, Analyzer, AnalyzerConfig,
    BroadcastPolicy, IpClassError,
};
use ipclass_core::{AddressClass, ClassfulMask, Ipv4Address};

#[test]
fn test_class_c_scenario() {
    let result = analyze("192.168.1.1").expect("valid address");

    assert_eq!(result.mask.to_string(), "255.255.255.0");
    assert_eq!(result.cidr_range, "192.168.1.1/24");
    assert_eq!(result.broadcast_text(), "192.168.1.255");
    assert_eq!(result.binary, "11000000.10101000.00000001.00000001");
}

#[test]
fn test_class_a_scenario() {
    let result = analyze("10.0.0.5").expect("valid address");

    assert_eq!(result.mask.to_string(), "255.0.0.0");
    assert_eq!(result.cidr_range, "10.0.0.5/8");
    assert_eq!(result.broadcast_text(), "10.255.255.255");
}

#[test]
fn test_class_b_scenario() {
    let result = analyze("172.16.4.9").expect("valid address");

    assert_eq!(result.class, AddressClass::B);
    assert_eq!(result.cidr_range, "172.16.4.9/16");
    assert_eq!(result.broadcast_text(), "172.16.255.255");
}

#[test]
fn test_multicast_scenario() {
    let result = analyze("230.1.2.3").expect("valid address");

    assert_eq!(result.mask.to_string(), "N/A");
    assert_eq!(result.cidr_range, "230.1.2.3");
    assert_eq!(result.prefix_len, 32);
    assert_eq!(result.broadcast_text(), "N/A");
}

#[test]
fn test_invalid_scenarios() {
    assert!(matches!(
        analyze("999.1.1.1"),
        Err(IpClassError::InvalidAddress(_))
    ));
    assert!(matches!(analyze("1.2.3"), Err(IpClassError::InvalidAddress(_))));
    assert!(matches!(
        analyze("192.168.1.0/24"),
        Err(IpClassError::InvalidAddress(_))
    ));
}

#[test]
fn test_classful_table_is_total() {
    for octet in 0..=u8::MAX {
        let expected = if octet <= 127 {
            AddressClass::A
        } else if octet <= 191 {
            AddressClass::B
        } else if octet <= 223 {
            AddressClass::C
        } else if octet <= 239 {
            AddressClass::D
        } else {
            AddressClass::E
        };
        assert_eq!(classify(octet), expected, "first octet {}", octet);
    }
}

#[test]
fn test_every_first_octet_analyzes() {
    for octet in 0..=u8::MAX {
        let input = format!("{}.17.34.51", octet);
        let result = analyze(&input).expect("valid address");

        let groups: Vec<&str> = result.binary.split('.').collect();
        assert_eq!(groups.len(), 4);
        assert!(groups
            .iter()
            .all(|g| g.len() == 8 && g.bytes().all(|b| b == b'0' || b == b'1')));
        assert_eq!(result.binary.len(), 35);

        if (224..=239).contains(&octet) {
            assert_eq!(result.prefix_len, 32);
        }
    }
}

#[test]
fn test_broadcast_formula_for_unicast_classes() {
    for input in ["0.1.2.3", "127.255.0.1", "128.0.0.1", "191.44.3.2", "192.0.2.1", "223.1.1.1"] {
        let result = analyze(input).expect("valid address");
        let mask = result.mask.as_mask().expect("class A/B/C has a mask");
        let expected = broadcast(&result.address, mask);
        assert_eq!(result.broadcast, Some(expected));

        let addr = result.address.octets();
        let m = mask.octets();
        let b = expected.octets();
        for i in 0..4 {
            assert_eq!(b[i], addr[i] | (!m[i] & 255));
        }
    }
}

#[test]
fn test_cidr_monotonic() {
    assert_eq!(derive_prefix_len("255.0.0.0").unwrap(), 8);
    assert_eq!(derive_prefix_len("255.255.0.0").unwrap(), 16);
    assert_eq!(derive_prefix_len("255.255.255.0").unwrap(), 24);
    assert_eq!(derive_prefix_len("255.255.255.255").unwrap(), 32);
}

#[test]
fn test_invalid_mask_is_data() {
    let err = derive_prefix_len("N/A").unwrap_err();
    assert_eq!(err.to_string(), "Invalid IP or Subnet Mask: N/A");
}

#[test]
fn test_reserved_class_policies() {
    let suppress = Analyzer::default().analyze("245.6.7.8").unwrap();
    assert_eq!(suppress.broadcast, None);
    assert_eq!(suppress.cidr_range, "245.6.7.8");

    let config = AnalyzerConfig {
        na_broadcast: BroadcastPolicy::Address,
    };
    let unmasked = Analyzer::new(config).analyze("245.6.7.8").unwrap();
    assert_eq!(unmasked.broadcast, Some(Ipv4Address::new(245, 6, 7, 8)));
    assert_eq!(resolve_mask(&unmasked.address), ClassfulMask::NotApplicable);
}

#[test]
fn test_all_ones_address() {
    let result = analyze("255.255.255.255").unwrap();
    assert_eq!(result.class, AddressClass::E);
    assert_eq!(result.prefix_len, 32);
    assert_eq!(result.binary, "11111111.11111111.11111111.11111111");
}

#[test]
fn test_result_json_shape() {
    let result = analyze("192.168.1.1").unwrap();
    let json = serde_json::to_value(&result).expect("serialization failed");

    assert_eq!(json["ip"], "192.168.1.1");
    assert_eq!(json["subnet"], "255.255.255.0");
    assert_eq!(json["ipRange"], "192.168.1.1/24");
    assert_eq!(json["broadcast"], "192.168.1.255");
}

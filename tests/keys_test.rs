use chainkeys::{CurveType, KeyPair, generate_keypair};
use serde::Deserialize;
use std::collections::HashSet;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn mock_keypair(private_key: Vec<u8>, curve: CurveType) -> KeyPair {
    let mut keypair = generate_keypair(curve).expect("keypair generation");
    keypair.private_key.bytes = private_key;
    keypair
}

#[derive(Deserialize)]
struct SimpleHex {
    hex_bytes: String,
}

#[test]
fn test_json_encoding() {
    init_logger();
    for curve in CurveType::ALL {
        let keypair = generate_keypair(curve).unwrap();
        let json = serde_json::to_string(&keypair.private_key).unwrap();

        let simple: SimpleHex = serde_json::from_str(&json).unwrap();
        assert_eq!(simple.hex_bytes, simple.hex_bytes.to_lowercase());
        let decoded = hex::decode(&simple.hex_bytes).unwrap();
        assert_eq!(decoded, keypair.private_key.bytes);
    }
}

#[test]
fn test_secp256k1_private_key_round_trip() {
    init_logger();
    let keypair = generate_keypair(CurveType::Secp256k1).unwrap();
    let json = serde_json::to_string(&keypair.private_key).unwrap();

    let simple: SimpleHex = serde_json::from_str(&json).unwrap();
    let decoded = hex::decode(simple.hex_bytes).unwrap();
    assert_eq!(decoded.len(), 32);
    assert_eq!(decoded, keypair.private_key.bytes);
}

#[test]
fn test_generate_keypair_secp256k1() {
    let curve = CurveType::Secp256k1;
    let keypair = generate_keypair(curve).unwrap();

    assert_eq!(keypair.public_key.curve_type, curve);
    assert_eq!(keypair.private_key.curve_type, curve);
    assert_eq!(keypair.private_key.bytes.len(), 32);
    keypair.is_valid().unwrap();
}

#[test]
fn test_generate_keypair_edwards25519() {
    let curve = CurveType::Edwards25519;
    let keypair = generate_keypair(curve).unwrap();

    assert_eq!(keypair.public_key.curve_type, curve);
    assert_eq!(keypair.private_key.curve_type, curve);
    assert_eq!(keypair.private_key.bytes.len(), 32);
    keypair.is_valid().unwrap();
}

#[test]
fn test_generated_keys_are_independent() {
    for curve in CurveType::ALL {
        let a = generate_keypair(curve).unwrap();
        let b = generate_keypair(curve).unwrap();
        assert_ne!(a.private_key, b.private_key);
        assert_ne!(a.public_key, b.public_key);
    }
}

#[test]
fn test_keypair_curve_mismatch() {
    let mut keypair = generate_keypair(CurveType::Edwards25519).unwrap();
    keypair.public_key.curve_type = CurveType::Secp256k1;
    let err = keypair.is_valid().unwrap_err();
    assert!(err.to_string().contains("do not match"));

    let mut keypair = generate_keypair(CurveType::Secp256k1).unwrap();
    keypair.public_key.curve_type = CurveType::Edwards25519;
    let err = keypair.is_valid().unwrap_err();
    assert!(err.to_string().contains("do not match"));
}

#[test]
fn test_keypair_private_key_length() {
    for curve in CurveType::ALL {
        for len in [33, 31, 0, 20] {
            let err = mock_keypair(vec![0; len], curve).is_valid().unwrap_err();
            assert!(
                err.to_string().contains("invalid privkey length"),
                "{curve} with {len} bytes: {err}"
            );
        }
        mock_keypair(vec![0; 32], curve).is_valid().unwrap();
    }
}

#[test]
fn test_import_private_key() {
    let keypair = chainkeys::import_private_key(
        "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
        CurveType::Edwards25519,
    )
    .unwrap();
    assert_eq!(
        keypair.public_key.to_hex(),
        "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"
    );
    keypair.is_valid().unwrap();
}

#[test]
fn test_unsupported_curve_name() {
    let err = "secp256r1".parse::<CurveType>().unwrap_err();
    assert!(err.to_string().contains("unsupported curve type"));
}

#[test]
fn test_concurrent_generation_is_independent() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 4;

    for curve in CurveType::ALL {
        let keys: Vec<Vec<u8>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    s.spawn(move || {
                        (0..PER_THREAD)
                            .map(|_| generate_keypair(curve).unwrap().private_key.bytes.clone())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().expect("generator thread panicked"))
                .collect()
        });

        let distinct: HashSet<&Vec<u8>> = keys.iter().collect();
        assert_eq!(keys.len(), THREADS * PER_THREAD);
        assert_eq!(distinct.len(), keys.len(), "{curve} produced a repeated private key");
    }
}

#[test]
fn test_keypair_from_json() {
    let keypair = generate_keypair(CurveType::Edwards25519).unwrap();
    let json = serde_json::to_string(&keypair).unwrap();
    let decoded = KeyPair::from_json(&json).unwrap();
    assert_eq!(decoded, keypair);
    decoded.is_valid().unwrap();
}

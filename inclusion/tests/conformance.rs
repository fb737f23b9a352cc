//! Fixed commitment vectors for both a user namespace and the lowest
//! namespace a blob may use.

use inclusion::{CommitmentConfig, SubtreePlan, create_commitment};
use inclusion_share::{Blob, Namespace, SHARE_SIZE, parse_sparse_shares, split_blob};
use pretty_assertions::assert_eq;

struct Vector {
    name: &'static str,
    data: Vec<u8>,
    shares: usize,
    width: u64,
    subtrees: usize,
    user: &'static str,
    lowest: &'static str,
}

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

fn with_byte(len: usize, index: usize, byte: u8) -> Vec<u8> {
    let mut data = vec![0u8; len];
    data[index] = byte;
    data
}

fn user_namespace() -> Namespace {
    Namespace::new_v0(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A])
        .expect("valid namespace")
}

fn lowest_namespace() -> Namespace {
    Namespace::new_v0(&[0x01, 0x00]).expect("valid namespace")
}

fn vectors() -> Vec<Vector> {
    vec![
        Vector {
            name: "empty",
            data: vec![],
            shares: 1,
            width: 1,
            subtrees: 1,
            user: "a6e97acfdc2423f65dcc0e58bfd152e59cd13d406779ba3b2244cd7b1df40d9b",
            lowest: "82f00a56bdabff2c134e64ef8cb3f2f8e257691d75e4638869127f36db8cecf5",
        },
        Vector {
            name: "zeros_478",
            data: vec![0u8; 478],
            shares: 1,
            width: 1,
            subtrees: 1,
            user: "867e244169b76771e7a467cc1c2c1275737108ca00eea35489e1a2a4c0748d56",
            lowest: "4ab1de6722873eeb59fb396c275ca7a910c1772a41d733121910094a621c45ec",
        },
        Vector {
            name: "zeros_479",
            data: vec![0u8; 479],
            shares: 2,
            width: 1,
            subtrees: 2,
            user: "c63108a51f0ab3e898333c88334792d5f5bebcac182ff6701824c878c68db476",
            lowest: "71f38b960491fc0db9fdfa4634747024675103a661232291740543fb511509f4",
        },
        Vector {
            name: "prefix_one_478",
            data: with_byte(478, 0, 0x01),
            shares: 1,
            width: 1,
            subtrees: 1,
            user: "fc1fbe4a63a301fc453b5943ff51370cb405ca9006d7259ca4820bf5352f805d",
            lowest: "b1dde70f489db78bc5647665dd6160b376ca8b56819cd5e80c47b98ac7e01b7b",
        },
        Vector {
            name: "suffix_one_478",
            data: with_byte(478, 477, 0x01),
            shares: 1,
            width: 1,
            subtrees: 1,
            user: "350c612fcb9ad50f6e3c53aed76de8a1e4b8db6027e638cc100b493d0a065f05",
            lowest: "0404049427fc55307c21b5550a646d199fe81066064b9d8490e34e6f0c2ba393",
        },
        Vector {
            name: "prefix_one_479",
            data: with_byte(479, 0, 0x01),
            shares: 2,
            width: 1,
            subtrees: 2,
            user: "2d8a994a086ea6098b9fdd66806844f88ac10d8dcaba4ed80386c64d8e161d4c",
            lowest: "019957ec756864ad8f6ed5e8631c26f16e4f2ef67b750546600537502c337e30",
        },
        Vector {
            name: "suffix_one_479",
            data: with_byte(479, 478, 0x01),
            shares: 2,
            width: 1,
            subtrees: 2,
            user: "b2fa804a6e3da1413b8f20b55b6c8f398be4c7691298e762ef7c868b4c790c90",
            lowest: "0a654120056a8fdd540b9b090804458b76673d99f12e1e2fdab65a02f430a600",
        },
        Vector {
            name: "pattern_1024",
            data: pattern(1024),
            shares: 3,
            width: 1,
            subtrees: 3,
            user: "ca26c4431022dd1f7ccb6600dcc14b44040593cf99c3555cbe394ea8a68b3fe0",
            lowest: "41ebdd4a5cb480342d67894d902ab4390ac7ba16e9a6fcb29c3844561c16259b",
        },
        Vector {
            name: "pattern_10240",
            data: pattern(10 * 1024),
            shares: 22,
            width: 1,
            subtrees: 22,
            user: "8f30b5e3792cff8c14d4717fd1bef993cd115e22712684bc0c52349b8b24c2e2",
            lowest: "06fa4375fd6a024be7d887d93fe954a75492121cb286951691ca37053c5d8eca",
        },
        Vector {
            name: "pattern_40000",
            data: pattern(40_000),
            shares: 83,
            width: 2,
            subtrees: 42,
            user: "f672ef1a197a36bf118681c10d7ea97c2b999cbc0016b770c2febfc46526dc53",
            lowest: "9bd13be826897dd2b38133fc2284c358194a947606d04837793d9b36e4440275",
        },
    ]
}

fn commitment_hex(namespace: Namespace, data: &[u8], config: &CommitmentConfig) -> String {
    let blob = Blob::new(namespace, data.to_vec(), 0, None).expect("valid blob");
    create_commitment(&blob, config)
        .unwrap()
        .expect("commitment")
        .to_string()
}

#[test]
fn commitment_vectors() {
    let config = CommitmentConfig::default();
    for vector in vectors() {
        for (namespace, expected) in [
            (user_namespace(), vector.user),
            (lowest_namespace(), vector.lowest),
        ] {
            assert_eq!(
                commitment_hex(namespace, &vector.data, &config),
                expected,
                "{} in namespace {}",
                vector.name,
                namespace
            );
        }
    }
}

#[test]
fn share_layout_vectors() {
    for vector in vectors() {
        let blob = Blob::new(user_namespace(), vector.data.clone(), 0, None).expect("valid blob");
        let shares = split_blob(&blob, usize::MAX).expect("split");
        assert_eq!(shares.len(), vector.shares, "{}", vector.name);

        let plan = SubtreePlan::new(shares.len(), 64).expect("plan");
        assert_eq!(plan.width(), vector.width, "{}", vector.name);
        assert_eq!(plan.subtree_count(), vector.subtrees, "{}", vector.name);

        assert_eq!(parse_sparse_shares(&shares).expect("parse"), vec![blob]);
    }
}

/// Expand the leading bytes of a share, given as hex, with the zero padding
/// that fills the rest of it.
fn padded_share_hex(head: &str) -> String {
    format!("{}{}", head, "00".repeat(SHARE_SIZE - head.len() / 2))
}

#[test]
fn share_bytes_vectors() {
    // namespace | info | length (0x1df = 479) | payload
    let cases: [(&str, Vec<u8>, [&str; 2]); 3] = [
        (
            "zeros_479",
            vec![0u8; 479],
            [
                "000000000000000000000000000000000000000102030405060708090a01000001df00",
                "000000000000000000000000000000000000000102030405060708090a0000",
            ],
        ),
        (
            "prefix_one_479",
            with_byte(479, 0, 0x01),
            [
                "000000000000000000000000000000000000000102030405060708090a01000001df01",
                "000000000000000000000000000000000000000102030405060708090a0000",
            ],
        ),
        (
            "suffix_one_479",
            with_byte(479, 478, 0x01),
            [
                "000000000000000000000000000000000000000102030405060708090a01000001df00",
                "000000000000000000000000000000000000000102030405060708090a0001",
            ],
        ),
    ];
    for (name, data, heads) in cases {
        let blob = Blob::new(user_namespace(), data, 0, None).expect("valid blob");
        let shares = split_blob(&blob, usize::MAX).expect("split");
        let encoded: Vec<String> = shares
            .iter()
            .map(|share| hex::encode(share.as_bytes()))
            .collect();
        let expected: Vec<String> = heads.iter().map(|head| padded_share_hex(head)).collect();
        assert_eq!(encoded, expected, "{}", name);
    }
}

#[test]
fn threshold_changes_commitment() {
    let data = pattern(10 * 1024);
    for (threshold, expected) in [
        (1, "a796b13bee0ec301d046d3f49dbc05eadda6096d71b94e5be087fb97600914a5"),
        (4, "3744e2caac3db85b7ff29f6bd453df9644278f36b591eca871e924e65b5f08ed"),
        (64, "8f30b5e3792cff8c14d4717fd1bef993cd115e22712684bc0c52349b8b24c2e2"),
    ] {
        let config = CommitmentConfig::default().with_subtree_root_threshold(threshold);
        assert_eq!(
            commitment_hex(user_namespace(), &data, &config),
            expected,
            "threshold {}",
            threshold
        );
    }
}

use assert_matches::assert_matches;
use inclusion_nmt::{Hash, NamespaceMerkleTree, NamespacedHash};
use inclusion_share::{Blob, Namespace, Share, split_blob};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};
use sha2::{Digest, Sha256};

use crate::*;

fn namespace(last: u8) -> Namespace {
    Namespace::new_v0(&[0xAB, 0xCD, last]).expect("valid namespace")
}

fn blob(len: usize) -> Blob {
    let mut rng = StdRng::seed_from_u64(len as u64);
    let mut data = vec![0u8; len];
    rng.fill(&mut data[..]);
    Blob::new(namespace(1), data, 0, None).expect("valid blob")
}

fn sha256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Digest of a namespaced tree leaf: `0x00 || ns || ns || ns || share`.
fn namespaced_leaf(ns: &[u8], share: &[u8]) -> [u8; 32] {
    sha256(&[&[0x00][..], ns, ns, ns, share])
}

fn commit(blob: &Blob) -> Commitment {
    create_commitment(blob, &CommitmentConfig::default())
        .unwrap()
        .expect("commitment")
}

/// Hands back the leftmost subtree digest.
struct LeftmostRoot;

impl RootCombinator for LeftmostRoot {
    fn combine(&self, roots: &[Hash]) -> CostResult<Hash, inclusion_nmt::Error> {
        match roots.first() {
            Some(root) => Ok(*root).wrap_with_cost(OperationCost::default()),
            None => Err(inclusion_nmt::Error::EmptyInput).wrap_with_cost(OperationCost::default()),
        }
    }
}

#[test]
fn test_single_share_commitment_matches_manual_hashing() {
    let ns = namespace(7);
    let blob = Blob::new(ns, vec![0u8; 478], 0, None).expect("valid blob");
    let shares = split_blob(&blob, usize::MAX).expect("split");
    assert_eq!(shares.len(), 1);

    let ns_bytes = ns.as_bytes();
    let subtree = namespaced_leaf(ns_bytes, shares[0].as_bytes());
    let expected = sha256(&[&[0x00][..], &subtree[..]]);

    let result = create_commitment(&blob, &CommitmentConfig::default());
    assert_eq!(result.value, Ok(Commitment::new(expected)));
    assert_eq!(result.cost.hash_leaf_calls, 2);
    assert_eq!(result.cost.hash_node_calls, 0);
}

#[test]
fn test_two_share_commitment_matches_manual_hashing() {
    let ns = namespace(8);
    let blob = Blob::new(ns, vec![0u8; 479], 0, None).expect("valid blob");
    let shares = split_blob(&blob, usize::MAX).expect("split");
    assert_eq!(shares.len(), 2);

    let ns_bytes = ns.as_bytes();
    let first = namespaced_leaf(ns_bytes, shares[0].as_bytes());
    let second = namespaced_leaf(ns_bytes, shares[1].as_bytes());
    let expected = sha256(&[
        &[0x01][..],
        &sha256(&[&[0x00][..], &first[..]])[..],
        &sha256(&[&[0x00][..], &second[..]])[..],
    ]);

    assert_eq!(commit(&blob), Commitment::new(expected));
}

#[test]
fn test_commitment_is_deterministic() {
    let blob = blob(10 * 1024);
    assert_eq!(blob.shares_needed(), 22);
    assert_eq!(commit(&blob), commit(&blob.clone()));
}

#[test]
fn test_commitment_depends_on_namespace_and_data() {
    let data = vec![0x42u8; 1000];
    let a = Blob::new(namespace(1), data.clone(), 0, None).expect("valid blob");
    let b = Blob::new(namespace(2), data.clone(), 0, None).expect("valid blob");
    let mut changed = data;
    changed[999] ^= 1;
    let c = Blob::new(namespace(1), changed, 0, None).expect("valid blob");
    assert_ne!(commit(&a), commit(&b));
    assert_ne!(commit(&a), commit(&c));
}

#[test]
fn test_signed_blob_commitment() {
    let data = vec![0x42u8; 1000];
    let plain = Blob::new(namespace(1), data.clone(), 0, None).expect("valid blob");
    let signed = Blob::new(namespace(1), data, 1, Some(vec![0x99; 20])).expect("valid blob");
    assert_ne!(commit(&plain), commit(&signed));
}

#[test]
fn test_commitment_cost_counts_every_hash() {
    // 22 shares, width 1: 22 single-leaf subtrees, then a 22-leaf plain tree.
    let result = create_commitment(&blob(10 * 1024), &CommitmentConfig::default());
    assert!(result.value.is_ok());
    assert_eq!(result.cost.hash_leaf_calls, 44);
    assert_eq!(result.cost.hash_node_calls, 21);
}

#[test]
fn test_blob_too_large() {
    let config = CommitmentConfig::default().with_max_blob_size(1000);
    let result = create_commitment(&blob(1001), &config);
    assert_matches!(
        result.value,
        Err(Error::Share(inclusion_share::Error::BlobTooLarge { len: 1001, max: 1000 }))
    );
    assert!(result.cost.is_nothing());
}

#[test]
fn test_invalid_config() {
    let config = CommitmentConfig::default().with_subtree_root_threshold(0);
    assert_matches!(
        create_commitment(&blob(10), &config).unwrap(),
        Err(Error::InvalidConfig(_))
    );
}

#[test]
fn test_subtree_roots_of_no_shares() {
    assert_matches!(
        subtree_roots::<Sha256Hasher>(&[], 64).unwrap(),
        Err(Error::InvalidPlan(_))
    );
}

#[test]
fn test_subtree_roots_follow_plan() {
    let shares = split_blob(&blob(40_000), usize::MAX).expect("split");
    let plan = SubtreePlan::new(shares.len(), 64).expect("plan");
    let roots = subtree_roots::<Sha256Hasher>(&shares, 64)
        .unwrap()
        .expect("roots");
    assert_eq!(roots.len(), plan.subtree_count());

    let expected: Vec<NamespacedHash> = plan
        .chunk_ranges()
        .map(|range| {
            let mut tree = NamespaceMerkleTree::<Sha256Hasher>::new();
            for share in &shares[range] {
                let mut leaf = share.namespace().to_bytes().to_vec();
                leaf.extend_from_slice(share.as_bytes());
                tree.push(&leaf).unwrap().expect("push");
            }
            tree.root().unwrap().expect("root")
        })
        .collect();
    assert_eq!(roots, expected);
    assert!(
        roots
            .iter()
            .all(|root| root.min_namespace() == namespace(1).as_bytes())
    );
}

#[test]
fn test_custom_combinator_sees_subtree_digests() {
    let blob = blob(100);
    let shares = split_blob(&blob, usize::MAX).expect("split");
    let roots = subtree_roots::<Sha256Hasher>(&shares, 64)
        .unwrap()
        .expect("roots");
    let config = CommitmentConfig::default();
    let commitment = create_commitment_with::<Sha256Hasher, _>(&blob, &config, &LeftmostRoot)
        .unwrap()
        .expect("commitment");
    assert_eq!(commitment.to_bytes(), roots[0].digest());
}

#[test]
fn test_hasher_choice_changes_commitment() {
    let blob = blob(2000);
    let config = CommitmentConfig::default();
    let sha = commit(&blob);
    let blake = create_commitment_with::<Blake3Hasher, _>(
        &blob,
        &config,
        &PlainMerkleRoot::<Blake3Hasher>::new(),
    )
    .unwrap()
    .expect("commitment");
    assert_ne!(sha, blake);
}

#[test]
fn test_commitment_from_shares_matches_blob_path() {
    let blob = blob(5000);
    let shares: Vec<Share> = split_blob(&blob, usize::MAX).expect("split");
    let from_shares = commitment_from_shares::<Sha256Hasher, _>(
        &shares,
        DEFAULT_SUBTREE_ROOT_THRESHOLD,
        &PlainMerkleRoot::<Sha256Hasher>::new(),
    )
    .unwrap()
    .expect("commitment");
    assert_eq!(from_shares, commit(&blob));
}

#[test]
fn test_create_commitments_keeps_order() {
    let blobs = vec![blob(1), blob(600), blob(3000)];
    let result = create_commitments(&blobs, &CommitmentConfig::default());
    let commitments = result.value.expect("commitments");
    assert_eq!(
        commitments,
        blobs.iter().map(commit).collect::<Vec<_>>()
    );

    let config = CommitmentConfig::default().with_max_blob_size(1000);
    assert_matches!(
        create_commitments(&blobs, &config).unwrap(),
        Err(Error::Share(_))
    );
}

#[test]
fn test_commitment_display() {
    let commitment = Commitment::new([0xAB; 32]);
    assert_eq!(commitment.to_string(), "ab".repeat(32));
    assert_eq!(format!("{:?}", commitment), format!("Commitment({})", "ab".repeat(32)));
    assert_eq!(<[u8; 32]>::from(commitment), [0xAB; 32]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_subtree_count_within_threshold(len in 0usize..60_000, threshold in 1u64..80) {
        let blob = Blob::new(namespace(3), vec![0x5A; len], 0, None).expect("valid blob");
        let shares = split_blob(&blob, usize::MAX).expect("split");
        let roots = subtree_roots::<Sha256Hasher>(&shares, threshold)
            .unwrap()
            .expect("roots");
        let plan = SubtreePlan::new(shares.len(), threshold).expect("plan");
        prop_assert_eq!(roots.len(), plan.subtree_count());
        prop_assert!(plan.sizes().iter().sum::<u64>() == shares.len() as u64);
    }
}

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Byte length of the content fingerprint (SHA-1 digest of the off-chain
/// metadata, computed and verified by the content store).
pub const CONTENT_FINGERPRINT_LEN: usize = 20;

pub type ContentFingerprint<M> = ManagedByteArray<M, CONTENT_FINGERPRINT_LEN>;

// ============================================================
// Initiative — the core funding/governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Initiative<M: ManagedTypeApi> {
    pub id: u64,
    pub initiator: ManagedAddress<M>,
    /// Minimum percentage of pledged-fund weight that must vote yes
    /// to release the pooled funds. In [0, 100].
    pub acceptance_threshold: u64,
    /// Digest binding the off-chain metadata to this record. The engine
    /// never interprets it.
    pub content_fingerprint: ContentFingerprint<M>,
    /// Sum of all pledges. Kept after close as the disbursed amount.
    pub total_funds: BigUint<M>,
    /// Set once by a successful acceptance vote. Terminal.
    pub closed: bool,
}

// ============================================================
// Ballot — one cast vote in the current round
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Ballot<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub approval: bool,
}

// ============================================================
// InitiativeView — full snapshot returned to callers
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct InitiativeView<M: ManagedTypeApi> {
    pub id: u64,
    pub initiator: ManagedAddress<M>,
    pub acceptance_threshold: u64,
    pub content_fingerprint: ContentFingerprint<M>,
    /// Zero address while no executor is nominated.
    pub executor: ManagedAddress<M>,
    pub backers: ManagedVec<M, ManagedAddress<M>>,
    /// Pledged amount per backer, parallel to `backers`.
    pub backer_funds: ManagedVec<M, BigUint<M>>,
    pub total_funds: BigUint<M>,
    pub closed: bool,
    pub voters: ManagedVec<M, ManagedAddress<M>>,
    /// Choices parallel to `voters`.
    pub votes: ManagedVec<M, bool>,
}

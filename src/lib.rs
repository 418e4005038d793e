#![no_std]

multiversx_sc::imports!();

pub mod types;

use types::{Ballot, ContentFingerprint, Initiative, InitiativeView};

// ============================================================
// Constants
// ============================================================

/// Percentage denominator for acceptance-threshold arithmetic
const PERCENT_DENOMINATOR: u64 = 100;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait Initiatives {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        self.initiative_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createInitiative
    // Anyone can register an initiative. The id is sequential
    // and also emitted in the creation event, which is how the
    // caller learns it.
    // ========================================================

    #[endpoint(createInitiative)]
    fn create_initiative(
        &self,
        content_fingerprint: ContentFingerprint<Self::Api>,
        acceptance_threshold: u64,
    ) -> u64 {
        require!(
            acceptance_threshold <= PERCENT_DENOMINATOR,
            "Acceptance threshold must be a percentage"
        );

        let caller = self.blockchain().get_caller();
        let id = self.initiative_count().get() + 1u64;

        let initiative = Initiative {
            id,
            initiator: caller.clone(),
            acceptance_threshold,
            content_fingerprint,
            total_funds: BigUint::zero(),
            closed: false,
        };

        self.initiatives(id).set(&initiative);
        self.initiative_count().set(id);

        self.initiative_created_event(id, &caller, acceptance_threshold);

        id
    }

    // ========================================================
    // ENDPOINT: backInitiative
    // The EGLD call value is the pledge. Pledges accumulate per
    // backer and stay in the contract's custody until a closing
    // vote disburses them.
    // ========================================================

    #[endpoint(backInitiative)]
    #[payable("EGLD")]
    fn back_initiative(&self, id: u64) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        require!(
            !self.initiatives(id).is_empty(),
            "Initiative does not exist"
        );
        require!(payment > 0u64, "Pledge must be greater than zero");

        let mut initiative = self.initiatives(id).get();
        require!(!initiative.closed, "Initiative is closed");

        // First positive pledge registers the backer, in pledge order.
        if self.backer_funds(id, &caller).is_empty() {
            self.backers(id).push(&caller);
        }
        self.backer_funds(id, &caller).update(|f| *f += &payment);

        initiative.total_funds += &payment;
        self.initiatives(id).set(&initiative);

        self.initiative_backed_event(id, &caller, &payment, &initiative.total_funds);
    }

    // ========================================================
    // ENDPOINT: nominateExecutor
    // Any identity may nominate itself to receive the pooled
    // funds; backers then decide by weighted vote. Nomination
    // opens the voting round.
    // ========================================================

    #[endpoint(nominateExecutor)]
    fn nominate_executor(&self, id: u64) {
        let caller = self.blockchain().get_caller();

        require!(
            !self.initiatives(id).is_empty(),
            "Initiative does not exist"
        );
        require!(
            self.executor(id).is_empty(),
            "Executor already nominated"
        );

        self.executor(id).set(&caller);

        self.executor_nominated_event(id, &caller);
    }

    // ========================================================
    // ENDPOINT: vote
    // Yes/No voting weighted by pledged funds. A yes weight of
    // at least the acceptance threshold closes the initiative
    // and pays the executor; a no weight strictly above the
    // threshold's complement rolls the round back.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, id: u64, approval: bool) {
        let caller = self.blockchain().get_caller();

        require!(
            !self.initiatives(id).is_empty(),
            "Initiative does not exist"
        );
        require!(!self.executor(id).is_empty(), "No executor nominated");

        let mut initiative = self.initiatives(id).get();
        require!(!initiative.closed, "Initiative is closed");
        require!(
            self.backer_funds(id, &caller).get() > 0u64,
            "Only backers can vote"
        );
        require!(!self.has_voted(id, &caller).get(), "Already voted");

        self.ballots(id).push(&Ballot {
            voter: caller.clone(),
            approval,
        });
        self.has_voted(id, &caller).set(true);

        self.vote_cast_event(id, &caller, approval);

        // Re-tally the whole round with current pledge weights. Weights
        // are compared multiply-first so no precision is lost at the
        // threshold boundary.
        let (affirmative, negative) = self.tally_round_weights(id);
        let close_bar = &initiative.total_funds * initiative.acceptance_threshold;
        let rollback_bar =
            &initiative.total_funds * (PERCENT_DENOMINATOR - initiative.acceptance_threshold);

        if affirmative * PERCENT_DENOMINATOR >= close_bar {
            // Accepted: disburse the full pool to the executor. The round
            // stays recorded as the audit trail.
            initiative.closed = true;
            self.initiatives(id).set(&initiative);

            let executor = self.executor(id).get();
            self.send().direct_egld(&executor, &initiative.total_funds);

            self.initiative_closed_event(id, &executor, &initiative.total_funds);
        } else if negative * PERCENT_DENOMINATOR > rollback_bar {
            // Rejected: drop the round and the nomination. Funds and
            // backers are untouched; a new nomination may follow.
            self.reset_voting_round(id);
            self.executor(id).clear();

            self.voting_rolled_back_event(id);
        }
    }

    // ========================================================
    // INTERNAL: weight tally
    // ========================================================

    /// Sums the current pledge weight behind each side of the open round.
    fn tally_round_weights(&self, id: u64) -> (BigUint, BigUint) {
        let mut affirmative = BigUint::zero();
        let mut negative = BigUint::zero();

        let ballots = self.ballots(id);
        for i in 1..=ballots.len() {
            let ballot = ballots.get(i);
            let weight = self.backer_funds(id, &ballot.voter).get();
            if ballot.approval {
                affirmative += weight;
            } else {
                negative += weight;
            }
        }

        (affirmative, negative)
    }

    /// Clears the cast ballots and the per-voter round flags.
    fn reset_voting_round(&self, id: u64) {
        let ballots = self.ballots(id);
        for i in 1..=ballots.len() {
            let ballot = ballots.get(i);
            self.has_voted(id, &ballot.voter).clear();
        }
        self.ballots(id).clear();
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getInitiativeById)]
    fn get_initiative_by_id(&self, id: u64) -> InitiativeView<Self::Api> {
        require!(
            !self.initiatives(id).is_empty(),
            "Initiative does not exist"
        );

        let initiative = self.initiatives(id).get();

        let executor = if self.executor(id).is_empty() {
            ManagedAddress::zero()
        } else {
            self.executor(id).get()
        };

        let mut backers = ManagedVec::new();
        let mut backer_funds = ManagedVec::new();
        let backers_mapper = self.backers(id);
        for i in 1..=backers_mapper.len() {
            let backer = backers_mapper.get(i);
            backer_funds.push(self.backer_funds(id, &backer).get());
            backers.push(backer);
        }

        let mut voters = ManagedVec::new();
        let mut votes = ManagedVec::new();
        let ballots = self.ballots(id);
        for i in 1..=ballots.len() {
            let ballot = ballots.get(i);
            voters.push(ballot.voter);
            votes.push(ballot.approval);
        }

        InitiativeView {
            id: initiative.id,
            initiator: initiative.initiator,
            acceptance_threshold: initiative.acceptance_threshold,
            content_fingerprint: initiative.content_fingerprint,
            executor,
            backers,
            backer_funds,
            total_funds: initiative.total_funds,
            closed: initiative.closed,
            voters,
            votes,
        }
    }

    #[view(getBackerAmountByInitiativeId)]
    fn get_backer_amount_by_initiative_id(&self, id: u64, backer: ManagedAddress) -> BigUint {
        require!(
            !self.initiatives(id).is_empty(),
            "Initiative does not exist"
        );

        self.backer_funds(id, &backer).get()
    }

    #[view(getOpenInitiativeIds)]
    fn get_open_initiative_ids(&self) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        let total = self.initiative_count().get();

        for id in 1..=total {
            if !self.initiatives(id).get().closed {
                result.push(id);
            }
        }
        result
    }

    #[view(getInitiatives)]
    fn get_initiatives(&self, from: u64, count: u64) -> MultiValueEncoded<Initiative<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.initiative_count().get();
        if total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            result.push(self.initiatives(id).get());
        }
        result
    }

    #[view(getInitiativeCount)]
    fn get_initiative_count(&self) -> u64 {
        self.initiative_count().get()
    }

    #[view(hasBackerVoted)]
    fn has_backer_voted(&self, id: u64, backer: &ManagedAddress) -> bool {
        self.has_voted(id, backer).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("initiativeCreated")]
    fn initiative_created_event(
        &self,
        #[indexed] id: u64,
        #[indexed] initiator: &ManagedAddress,
        acceptance_threshold: u64,
    );

    #[event("initiativeBacked")]
    fn initiative_backed_event(
        &self,
        #[indexed] id: u64,
        #[indexed] backer: &ManagedAddress,
        #[indexed] amount: &BigUint,
        total_funds: &BigUint,
    );

    #[event("executorNominated")]
    fn executor_nominated_event(
        &self,
        #[indexed] id: u64,
        #[indexed] executor: &ManagedAddress,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] id: u64,
        #[indexed] voter: &ManagedAddress,
        approval: bool,
    );

    #[event("initiativeClosed")]
    fn initiative_closed_event(
        &self,
        #[indexed] id: u64,
        #[indexed] executor: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("votingRolledBack")]
    fn voting_rolled_back_event(&self, #[indexed] id: u64);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Initiative records ──

    #[storage_mapper("initiativeCount")]
    fn initiative_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("initiatives")]
    fn initiatives(&self, id: u64) -> SingleValueMapper<Initiative<Self::Api>>;

    // ── Nomination: empty mapper means no executor ──

    #[storage_mapper("executor")]
    fn executor(&self, id: u64) -> SingleValueMapper<ManagedAddress>;

    // ── Pledges ──

    #[storage_mapper("backers")]
    fn backers(&self, id: u64) -> VecMapper<ManagedAddress>;

    #[storage_mapper("backerFunds")]
    fn backer_funds(&self, id: u64, backer: &ManagedAddress) -> SingleValueMapper<BigUint>;

    // ── Current voting round ──

    #[storage_mapper("ballots")]
    fn ballots(&self, id: u64) -> VecMapper<Ballot<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}

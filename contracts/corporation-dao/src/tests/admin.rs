use shared::ContractError;

use super::*;

#[test]
fn test_initialize_only_once() {
    let t = TestEnvironment::new();

    assert_eq!(t.client.get_admin(), t.admin);
    assert_eq!(t.client.get_config(), default_config());

    let again = t.client.try_initialize(&t.admin, &t.token, &default_config());
    assert_eq!(again, Err(Ok(ContractError::AlreadyInitialized)));
}

#[test]
fn test_invalid_config_is_rejected() {
    let t = TestEnvironment::new();

    let mut zero_quorum = default_config();
    zero_quorum.default_quorum_bps = 0;
    let mut inverted_periods = default_config();
    inverted_periods.min_voting_period = VOTING_PERIOD + 1;
    let mut cap_over_100 = default_config();
    cap_over_100.spend_cap_bps = 10_001;
    let mut negative_fee = default_config();
    negative_fee.creation_fee = -1;
    let mut no_seats = default_config();
    no_seats.default_max_members = 0;

    for config in [zero_quorum, inverted_periods, cap_over_100, negative_fee, no_seats] {
        let result = t.client.try_update_config(&t.admin, &config);
        assert_eq!(result, Err(Ok(ContractError::OutOfBounds)));
    }
    assert_eq!(t.client.get_config(), default_config());
}

#[test]
fn test_update_config_affects_new_corporations_only() {
    let t = TestEnvironment::new();
    let founder = t.create_user();
    let old = t.create_corporation(&founder, JoinPolicy::Open);

    let mut config = default_config();
    config.default_quorum_bps = 6_600;
    config.creation_fee = 2_000;
    t.client.update_config(&t.admin, &config);

    let new = t.create_corporation(&founder, JoinPolicy::Open);
    assert_eq!(t.client.get_corporation(&old).quorum_bps, 5_100);
    assert_eq!(t.client.get_corporation(&new).quorum_bps, 6_600);
    assert_eq!(t.client.treasury_balance(&new), 2_000);
}

#[test]
fn test_only_admin_manages_contract() {
    let t = TestEnvironment::new();
    let intruder = t.create_user();

    assert_eq!(
        t.client.try_update_config(&intruder, &default_config()),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(
        t.client.try_set_paused(&intruder, &true),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(
        t.client.try_withdraw_surplus(&intruder, &1),
        Err(Ok(ContractError::Unauthorized))
    );
}

#[test]
fn test_pause_blocks_member_actions() {
    let t = TestEnvironment::new();
    let (corp_id, members) = t.corporation_with_members(2);
    t.client.set_paused(&t.admin, &true);
    assert!(t.client.is_paused());

    let founder = t.create_user();
    let create = t.client.try_create_corporation(
        &founder,
        &t.string("Paused Corp"),
        &t.string(""),
        &JoinPolicy::Open,
        &CREATION_FEE,
    );
    assert_eq!(create, Err(Ok(ContractError::Paused)));
    assert_eq!(t.client.try_join(&t.create_user(), &corp_id), Err(Ok(ContractError::Paused)));
    assert_eq!(t.client.try_donate(&founder, &corp_id, &10), Err(Ok(ContractError::Paused)));
    assert_eq!(
        t.client.try_create_proposal(&members[0], &corp_id, &ProposalKind::Dissolution, &DEPOSIT),
        Err(Ok(ContractError::Paused))
    );

    // leaving is always possible
    t.client.leave(&members[1], &corp_id);

    t.client.set_paused(&t.admin, &false);
    t.client.join(&t.create_user(), &corp_id);
}

#[test]
fn test_admin_handover() {
    let t = TestEnvironment::new();
    let successor = t.create_user();
    let stranger = t.create_user();

    t.client.propose_admin(&t.admin, &successor);
    assert_eq!(t.client.get_pending_admin(), Some(successor.clone()));
    assert_eq!(t.client.try_accept_admin(&stranger), Err(Ok(ContractError::Unauthorized)));

    t.client.accept_admin(&successor);
    assert_eq!(t.client.get_admin(), successor);
    assert_eq!(t.client.get_pending_admin(), None);

    // the old admin has lost its powers
    assert_eq!(
        t.client.try_set_paused(&t.admin, &true),
        Err(Ok(ContractError::Unauthorized))
    );
    t.client.set_paused(&successor, &true);
}

#[test]
fn test_cancel_admin_handover() {
    let t = TestEnvironment::new();
    let successor = t.create_user();

    t.client.propose_admin(&t.admin, &successor);
    t.client.cancel_admin_transfer(&t.admin);

    assert_eq!(t.client.try_accept_admin(&successor), Err(Ok(ContractError::NotFound)));
    assert_eq!(t.client.get_admin(), t.admin);
    assert_eq!(
        t.client.try_cancel_admin_transfer(&t.admin),
        Err(Ok(ContractError::NotFound))
    );
}

#[test]
fn test_withdraw_surplus_never_touches_liabilities() {
    let t = TestEnvironment::new();
    let (corp_id, members) = t.corporation_with_members(2);
    t.propose(&members[0], corp_id, &t.custom(&members[0]));

    // tokens sent straight to the contract are owed to nobody
    t.token_admin.mint(&t.contract_id, &700);
    assert_eq!(t.client.custodied_balance(), CREATION_FEE + DEPOSIT + 700);
    assert_eq!(t.client.surplus(), 700);

    assert_eq!(
        t.client.try_withdraw_surplus(&t.admin, &701),
        Err(Ok(ContractError::InsufficientFunds))
    );
    assert_eq!(
        t.client.try_withdraw_surplus(&t.admin, &0),
        Err(Ok(ContractError::InvalidAmount))
    );

    t.client.withdraw_surplus(&t.admin, &700);
    assert_eq!(t.balance(&t.admin), 700);
    assert_eq!(t.client.surplus(), 0);
    assert_eq!(t.client.custodied_balance(), CREATION_FEE + DEPOSIT);
    assert_eq!(t.client.treasury_balance(&corp_id), CREATION_FEE);
}

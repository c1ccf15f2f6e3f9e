use shared::ContractError;

use super::*;
use crate::types::CorporationStatus;
use authorization::Role;

#[test]
fn test_create_corporation_credits_fee_to_treasury() {
    let t = TestEnvironment::new();
    let founder = t.create_user();

    let corp_id = t.create_corporation(&founder, JoinPolicy::Open);

    let corp = t.client.get_corporation(&corp_id);
    assert_eq!(corp.treasury_balance, CREATION_FEE);
    assert_eq!(corp.member_count, 1);
    assert_eq!(corp.status, CorporationStatus::Active);
    assert_eq!(corp.founder, founder);
    assert_eq!(corp.quorum_bps, 5_100);
    assert_eq!(corp.voting_period, VOTING_PERIOD);
    assert_eq!(corp.max_members, 50);

    assert_eq!(t.balance(&founder), STARTING_FUNDS - CREATION_FEE);
    assert_eq!(t.client.custodied_balance(), CREATION_FEE);
    assert_eq!(t.client.get_liabilities().treasuries, CREATION_FEE);
    assert_eq!(t.client.get_member(&corp_id, &founder).role, Role::Founder);
}

#[test]
fn test_create_corporation_requires_exact_fee() {
    let t = TestEnvironment::new();
    let founder = t.create_user();
    let name = t.string("Iron Syndicate");
    let description = t.string("");

    let under = t.client.try_create_corporation(&founder, &name, &description, &JoinPolicy::Open, &999);
    assert_eq!(under, Err(Ok(ContractError::InvalidAmount)));

    let over = t.client.try_create_corporation(&founder, &name, &description, &JoinPolicy::Open, &1_001);
    assert_eq!(over, Err(Ok(ContractError::InvalidAmount)));

    assert_eq!(t.balance(&founder), STARTING_FUNDS);
}

#[test]
fn test_create_corporation_rejects_empty_name() {
    let t = TestEnvironment::new();
    let founder = t.create_user();

    let result = t.client.try_create_corporation(
        &founder,
        &t.string(""),
        &t.string("no name"),
        &JoinPolicy::Open,
        &CREATION_FEE,
    );
    assert_eq!(result, Err(Ok(ContractError::InvalidInput)));
}

#[test]
fn test_corporation_ids_are_sequential() {
    let t = TestEnvironment::new();
    let founder = t.create_user();

    assert_eq!(t.create_corporation(&founder, JoinPolicy::Open), 1);
    assert_eq!(t.create_corporation(&founder, JoinPolicy::InviteOnly), 2);
    assert_eq!(t.client.get_corporation(&2).id, 2);
}

#[test]
fn test_get_missing_corporation() {
    let t = TestEnvironment::new();
    assert_eq!(t.client.try_get_corporation(&42), Err(Ok(ContractError::NotFound)));
}

#[test]
fn test_update_description_is_founder_only() {
    let t = TestEnvironment::new();
    let (corp_id, members) = t.corporation_with_members(2);

    let denied = t.client.try_update_description(&members[1], &corp_id, &t.string("hijacked"));
    assert_eq!(denied, Err(Ok(ContractError::Unauthorized)));

    t.client.update_description(&members[0], &corp_id, &t.string("Deep core mining"));
    assert_eq!(
        t.client.get_corporation(&corp_id).description,
        t.string("Deep core mining")
    );
}

#[test]
fn test_list_corporations_paginates() {
    let t = TestEnvironment::new();
    let founder = t.create_user();
    for _ in 0..3 {
        t.create_corporation(&founder, JoinPolicy::Open);
    }

    let first = t.client.list_corporations(&None, &2);
    assert_eq!(first.len(), 2);
    assert_eq!(first.get(0).unwrap().id, 1);
    assert_eq!(first.get(1).unwrap().id, 2);

    let rest = t.client.list_corporations(&Some(2), &10);
    assert_eq!(rest.len(), 1);
    assert_eq!(rest.get(0).unwrap().id, 3);

    // zero means the default page size
    assert_eq!(t.client.list_corporations(&None, &0).len(), 3);
}

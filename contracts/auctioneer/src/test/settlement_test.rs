use soroban_sdk::{testutils::Address as _, Address};

use crate::errors::Error;
use crate::test::{advance_ledger, setup_test, DEPOSIT};

#[test]
fn test_full_auction_lifecycle() {
    let ctx = setup_test();
    ctx.client.deposit(&ctx.owner, &DEPOSIT);
    ctx.client.deposit(&ctx.addr1, &DEPOSIT);
    ctx.client.deposit(&ctx.addr2, &DEPOSIT);

    ctx.client.start(&ctx.owner, &1, &50_000, &7);
    ctx.client.bid(&ctx.addr1, &1, &100_000);
    ctx.client.bid(&ctx.addr2, &1, &200_000);

    advance_ledger(&ctx.env, 10);
    ctx.client.end(&1);

    let status = ctx.client.nft_status(&1);
    assert!(status.ended);
    assert_eq!(status.winner, Some(ctx.addr2.clone()));
    assert_eq!(status.winnings, 200_000);

    ctx.client.claim_winner(&ctx.addr2, &1);
    ctx.client.claim_seller(&ctx.owner, &1);

    assert_eq!(ctx.nft.owner_of(&1), ctx.addr2);
    assert_eq!(ctx.client.get_deposit(&ctx.owner), DEPOSIT + 200_000);

    let status = ctx.client.nft_status(&1);
    assert!(status.seller_claimed);
    assert!(status.winner_claimed);
}

#[test]
fn test_end_before_deadline_fails() {
    let ctx = setup_test();
    ctx.client.deposit(&ctx.owner, &DEPOSIT);

    ctx.client.start(&ctx.owner, &1, &50_000, &7);

    let result = ctx.client.try_end(&1);
    assert_eq!(result, Err(Ok(Error::AuctionNotEnded)));
}

#[test]
fn test_end_twice_fails() {
    let ctx = setup_test();
    ctx.client.deposit(&ctx.owner, &DEPOSIT);

    ctx.client.start(&ctx.owner, &1, &50_000, &7);
    advance_ledger(&ctx.env, 10);
    ctx.client.end(&1);

    let result = ctx.client.try_end(&1);
    assert_eq!(result, Err(Ok(Error::AlreadyEnded)));
}

#[test]
fn test_end_without_bids_closes_winnerless() {
    let ctx = setup_test();
    ctx.client.deposit(&ctx.owner, &DEPOSIT);

    ctx.client.start(&ctx.owner, &1, &50_000, &7);
    advance_ledger(&ctx.env, 10);
    ctx.client.end(&1);

    let status = ctx.client.nft_status(&1);
    assert!(status.ended);
    assert_eq!(status.winner, None);
    assert_eq!(status.winnings, 0);

    // Nobody can take delivery; the seller settles with nothing credited.
    let result = ctx.client.try_claim_winner(&ctx.owner, &1);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));

    ctx.client.claim_seller(&ctx.owner, &1);
    assert_eq!(ctx.client.get_deposit(&ctx.owner), DEPOSIT);
    assert_eq!(ctx.nft.owner_of(&1), ctx.owner);
}

#[test]
fn test_claims_settle_exactly_once() {
    let ctx = setup_test();
    ctx.client.deposit(&ctx.owner, &DEPOSIT);
    ctx.client.deposit(&ctx.addr1, &DEPOSIT);

    ctx.client.start(&ctx.owner, &1, &50_000, &7);
    ctx.client.bid(&ctx.addr1, &1, &100_000);
    advance_ledger(&ctx.env, 10);
    ctx.client.end(&1);

    ctx.client.claim_winner(&ctx.addr1, &1);
    let result = ctx.client.try_claim_winner(&ctx.addr1, &1);
    assert_eq!(result, Err(Ok(Error::AlreadyClaimed)));

    ctx.client.claim_seller(&ctx.owner, &1);
    let result = ctx.client.try_claim_seller(&ctx.owner, &1);
    assert_eq!(result, Err(Ok(Error::AlreadyClaimed)));
}

#[test]
fn test_claims_are_role_gated() {
    let ctx = setup_test();
    ctx.client.deposit(&ctx.owner, &DEPOSIT);
    ctx.client.deposit(&ctx.addr1, &DEPOSIT);
    ctx.client.deposit(&ctx.addr2, &DEPOSIT);

    ctx.client.start(&ctx.owner, &1, &50_000, &7);
    ctx.client.bid(&ctx.addr1, &1, &100_000);
    ctx.client.bid(&ctx.addr2, &1, &200_000);
    advance_ledger(&ctx.env, 10);
    ctx.client.end(&1);

    // The outbid account is not the winner.
    let result = ctx.client.try_claim_winner(&ctx.addr1, &1);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));

    let result = ctx.client.try_claim_seller(&ctx.addr2, &1);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));
}

#[test]
fn test_claims_before_end_fail() {
    let ctx = setup_test();
    ctx.client.deposit(&ctx.owner, &DEPOSIT);
    ctx.client.deposit(&ctx.addr1, &DEPOSIT);

    ctx.client.start(&ctx.owner, &1, &50_000, &7);
    ctx.client.bid(&ctx.addr1, &1, &100_000);

    let result = ctx.client.try_claim_winner(&ctx.addr1, &1);
    assert_eq!(result, Err(Ok(Error::AuctionNotEnded)));

    let result = ctx.client.try_claim_seller(&ctx.owner, &1);
    assert_eq!(result, Err(Ok(Error::AuctionNotEnded)));
}

#[test]
fn test_seller_claim_pays_treasury_fee() {
    let ctx = setup_test();
    let treasury = Address::generate(&ctx.env);
    ctx.client.set_treasury(&ctx.admin, &treasury);
    ctx.client.set_fee_rate(&ctx.admin, &250);

    ctx.client.deposit(&ctx.owner, &DEPOSIT);
    ctx.client.deposit(&ctx.addr1, &DEPOSIT);

    ctx.client.start(&ctx.owner, &1, &50_000, &7);
    ctx.client.bid(&ctx.addr1, &1, &200_000);
    advance_ledger(&ctx.env, 10);
    ctx.client.end(&1);

    ctx.client.claim_seller(&ctx.owner, &1);

    let fee = (200_000 * 250) / 10000;
    assert_eq!(ctx.client.get_deposit(&ctx.owner), DEPOSIT + 200_000 - fee);
    assert_eq!(ctx.client.get_deposit(&treasury), fee);

    // Treasury proceeds are ordinary escrow, withdrawable like any other.
    ctx.client.withdraw_deposit(&treasury);
    assert_eq!(ctx.token.balance(&treasury), fee);
}

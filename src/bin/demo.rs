//! Escrow Policy Walkthrough
//!
//! Demonstrates the full spend policy:
//! - Seller, buyer, and arbiter keypairs are generated and their identity
//!   hashes bound into one escrow instance
//! - Each of the four actions is authorized with the correct stamp + spender
//!   signature
//! - Rejection paths: bad action code, swapped roles, replayed stamps

use oracle_escrow_lab::hash::pubkey_hash;
use oracle_escrow_lab::tx::{build_mock_tx, ecdsa_sign_tx, TransactionOutput};
use oracle_escrow_lab::{
    evaluate, generate_keypair, print_header, print_result, print_step, sign_stamp, stamp_message,
    Action, EscrowBuilder, EscrowError, Role, SpendRequest,
};

fn main() -> Result<(), EscrowError> {
    print_header("Oracle-Stamped Escrow Walkthrough");

    print_step(1, "Generate seller, buyer, and arbiter keypairs");
    let (seller_kp, seller_pk) = generate_keypair();
    let (buyer_kp, buyer_pk) = generate_keypair();
    let (arbiter_kp, arbiter_pk) = generate_keypair();

    print_step(2, "Bind identity hashes and a nonce into an escrow instance");
    let nonce = hex::decode("001122334455aabbcc").expect("static hex");
    let escrow = EscrowBuilder::new()
        .seller(&seller_pk)
        .buyer(&buyer_pk)
        .arbiter(&arbiter_pk)
        .nonce(nonce)
        .build()?;
    println!("  seller hash:  {}", hex::encode(escrow.seller_hash));
    println!("  buyer hash:   {}", hex::encode(escrow.buyer_hash));
    println!("  arbiter hash: {}", hex::encode(escrow.arbiter_hash));

    print_step(3, "Build a mock spending transaction and its sighash");
    let tx = build_mock_tx(
        vec![TransactionOutput {
            value: 999_900_000,
            script_public_key: pubkey_hash(&seller_pk).to_vec(),
        }],
        0,
    );
    let sighash = tx.signature_hash();

    print_step(4, "Authorize each of the four actions");
    for action in Action::ALL {
        let oracle_kp = match action.oracle() {
            Role::Seller => &seller_kp,
            Role::Buyer => &buyer_kp,
            Role::Arbiter => &arbiter_kp,
        };
        let (spender_kp, spender_pk) = match action.spender() {
            Role::Buyer => (&buyer_kp, buyer_pk),
            Role::Seller => (&seller_kp, seller_pk),
            Role::Arbiter => unreachable!("no action has an arbiter spender"),
        };
        let oracle_pk = match action.oracle() {
            Role::Seller => seller_pk,
            Role::Buyer => buyer_pk,
            Role::Arbiter => arbiter_pk,
        };

        let message = stamp_message(&escrow.nonce, action);
        let request = SpendRequest {
            action_code: action.code(),
            spender_pubkey: spender_pk,
            spender_sig: ecdsa_sign_tx(&tx, spender_kp),
            oracle_pubkey: oracle_pk,
            oracle_sig: sign_stamp(&message, oracle_kp),
        };
        print_result(
            &format!("{action:?}"),
            &evaluate(&escrow, &request, &sighash),
        );
    }

    print_step(5, "Rejection paths");

    // Unknown action code
    let message = stamp_message(&escrow.nonce, Action::ReleaseBySeller);
    let request = SpendRequest {
        action_code: 7,
        spender_pubkey: buyer_pk,
        spender_sig: ecdsa_sign_tx(&tx, &buyer_kp),
        oracle_pubkey: seller_pk,
        oracle_sig: sign_stamp(&message, &seller_kp),
    };
    print_result("unknown action code", &evaluate(&escrow, &request, &sighash));

    // Spender and oracle keys swapped
    let request = SpendRequest {
        action_code: Action::ReleaseBySeller.code(),
        spender_pubkey: seller_pk,
        spender_sig: ecdsa_sign_tx(&tx, &seller_kp),
        oracle_pubkey: buyer_pk,
        oracle_sig: sign_stamp(&message, &buyer_kp),
    };
    print_result("swapped roles", &evaluate(&escrow, &request, &sighash));

    // Arbiter stamp for ReleaseByArbiter replayed on ReturnByArbiter
    let release_msg = stamp_message(&escrow.nonce, Action::ReleaseByArbiter);
    let request = SpendRequest {
        action_code: Action::ReturnByArbiter.code(),
        spender_pubkey: seller_pk,
        spender_sig: ecdsa_sign_tx(&tx, &seller_kp),
        oracle_pubkey: arbiter_pk,
        oracle_sig: sign_stamp(&release_msg, &arbiter_kp),
    };
    print_result("stamp replayed across actions", &evaluate(&escrow, &request, &sighash));

    println!("\nDone.");
    Ok(())
}

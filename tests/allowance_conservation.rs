// Allowance accounting across administration and engine:
// creation consumes exactly one credit, adjustments move the allowance by
// exactly the requested delta, and failures leave it unchanged.

mod common;

use attest_config::AttestConfig;
use attest_management::ManagementError;
use attest_runtime::{Ledger, LedgerError};
use attest_types::{CreatorOperation, DocumentCreatorManagement, VerificationError, VerificationType};
use common::*;
use std::io::Write;

fn allowance(ledger: &Ledger, engine: &attest_types::Address, creator: &attest_types::Address) -> u64 {
    ledger.document_verification(engine).unwrap().document_creator_allowance(creator)
}

#[test]
fn test_creation_consumes_one_credit_each() {
    init_logging();
    let a = accounts();
    let (mut ledger, management, engine) = single_tenant_setup(a.admin);
    configure(&mut ledger, a.admin, management, a.user1, 3);

    for i in 0..3u64 {
        let before = allowance(&ledger, &engine, &a.user1);
        put_document(
            &mut ledger,
            &engine,
            a.user1,
            &format!("DOC-{}", i),
            60,
            VerificationType::Multisig,
            vec![a.user2],
        )
        .unwrap();
        assert_eq!(allowance(&ledger, &engine, &a.user1), before - 1);
    }
    assert_eq!(ledger.document_verification(&engine).unwrap().document_count(), 3);
    assert_eq!(
        put_document(&mut ledger, &engine, a.user1, "DOC-3", 60, VerificationType::Multisig, vec![a.user2]),
        Err(VerificationError::DocumentCreatorAllowanceNotEnough)
    );
}

#[test]
fn test_adjustments_are_exact_or_atomic() {
    init_logging();
    let a = accounts();
    let (mut ledger, management, engine) = single_tenant_setup(a.admin);
    configure(&mut ledger, a.admin, management, a.user1, 3);

    ledger
        .administer(a.admin, management, CreatorOperation::Increase { creator: a.user1, delta: 2 })
        .unwrap();
    assert_eq!(allowance(&ledger, &engine, &a.user1), 5);

    assert_eq!(
        ledger.administer(a.admin, management, CreatorOperation::Decrease { creator: a.user1, delta: 6 }),
        Err(LedgerError::Management(ManagementError::Verification(
            VerificationError::DecrementAmountExceedsAllowance
        )))
    );
    assert_eq!(allowance(&ledger, &engine, &a.user1), 5);

    assert_eq!(
        ledger.administer(a.user1, management, CreatorOperation::Increase { creator: a.user1, delta: 100 }),
        Err(LedgerError::Management(ManagementError::CallerIsNotOwner))
    );
    assert_eq!(allowance(&ledger, &engine, &a.user1), 5);

    ledger
        .administer(a.admin, management, CreatorOperation::Decrease { creator: a.user1, delta: 2 })
        .unwrap();
    assert_eq!(allowance(&ledger, &engine, &a.user1), 3);

    ledger
        .administer(a.admin, management, CreatorOperation::Remove { creator: a.user1 })
        .unwrap();
    assert_eq!(allowance(&ledger, &engine, &a.user1), 0);
    assert!(!ledger.document_verification(&engine).unwrap().is_document_creator(&a.user1));
}

#[test]
fn test_unbound_single_administration() {
    let a = accounts();
    let mut ledger = Ledger::new(GENESIS);
    let management = ledger.deploy_management_single(a.admin);
    assert_eq!(ledger.management_single(&management).unwrap().management_interface(), None);
    assert_eq!(
        ledger.administer(a.admin, management, CreatorOperation::Configure { creator: a.user1, amount: 1 }),
        Err(LedgerError::Management(ManagementError::ManagementInterfaceNotSet))
    );
}

#[test]
fn test_ledger_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[ledger]\ngenesis_timestamp = {}\n\n[logging]\nfilter = \"debug\"", GENESIS).unwrap();

    let config: AttestConfig = attest_config::load_config(file.path()).unwrap();
    attest_runtime::init_logging(&config.logging);
    let mut ledger = Ledger::from_config(&config);
    assert_eq!(ledger.now(), GENESIS);
    assert_eq!(ledger.advance_time(10), GENESIS + 10);
    assert!(ledger.set_time(GENESIS).is_err());
}

use crate::store::{CreatorStore, DocumentStore};
use attest_types::{
    Address, CallContext, CreatorAllowance, Document, DocumentCreatorManagement, Fingerprint,
    SignatureRecord, Timestamp, VerificationError, VerificationType,
};
use log::{debug, info};

/// Fewest signers a document may request.
pub const MIN_REQUESTED_SIGNERS: usize = 1;

/// One verification engine instance.
///
/// Creators register documents, requested signers sign or revoke, and any
/// caller can ask whether a document is currently legit. Creator allowances
/// can only be changed by the management identity fixed at construction.
#[derive(Debug, Clone)]
pub struct DocumentVerification {
    management: Address,
    documents: DocumentStore,
    creators: CreatorStore,
}

impl DocumentVerification {
    pub fn new(management: Address) -> Self {
        Self {
            management,
            documents: DocumentStore::new(),
            creators: CreatorStore::new(),
        }
    }

    /// The administration identity allowed to manage creators.
    pub fn management(&self) -> Address {
        self.management
    }

    /// Register a document for verification, consuming one credit of the caller.
    pub fn put_document_to_verification(
        &mut self,
        ctx: &CallContext,
        fingerprint: Fingerprint,
        verification_deadline: Timestamp,
        document_deadline: Timestamp,
        verification_type: VerificationType,
        requested_signers: Vec<Address>,
    ) -> Result<(), VerificationError> {
        let record = self.creators.get(&ctx.caller);
        if !record.is_creator {
            return Err(fail(VerificationError::CallerIsNotDocumentCreator));
        }
        if record.allowance == 0 {
            return Err(fail(VerificationError::DocumentCreatorAllowanceNotEnough));
        }
        if requested_signers.len() < MIN_REQUESTED_SIGNERS {
            return Err(fail(VerificationError::RequestedSignersAreNotEnough {
                sent: requested_signers.len(),
                required: MIN_REQUESTED_SIGNERS,
            }));
        }

        let mut signers: Vec<Address> = Vec::with_capacity(requested_signers.len());
        for signer in requested_signers {
            if !signers.contains(&signer) {
                signers.push(signer);
            }
        }

        let document = Document {
            creator: ctx.caller,
            verification_deadline,
            document_deadline,
            verification_type,
            requested_signers: signers,
            verification_created_at: ctx.now,
            signatures: Vec::new(),
        };
        if !self.documents.insert(fingerprint, document) {
            return Err(fail(VerificationError::DocumentIsAlreadyOnVerification));
        }
        self.creators.set(
            ctx.caller,
            CreatorAllowance { is_creator: true, allowance: record.allowance - 1 },
        );

        info!(
            "Document {} put to verification by {} ({:?}, verification deadline {}, document deadline {})",
            fingerprint, ctx.caller, verification_type, verification_deadline, document_deadline
        );
        Ok(())
    }

    /// Record the caller's signature on a document.
    pub fn sign_document(&mut self, ctx: &CallContext, fingerprint: Fingerprint) -> Result<(), VerificationError> {
        let document = self
            .documents
            .get_mut(&fingerprint)
            .ok_or_else(|| fail(VerificationError::InvalidDocument))?;

        if !document.is_requested(&ctx.caller) {
            return Err(fail(VerificationError::SignerIsNotRequested));
        }
        if document.has_signed(&ctx.caller) {
            return Err(fail(VerificationError::SignerAlreadySigned));
        }
        if ctx.now > document.verification_deadline {
            return Err(fail(VerificationError::LateToExecute(document.verification_deadline)));
        }

        document.signatures.push(SignatureRecord { signer: ctx.caller, signed_at: ctx.now });
        debug_assert!(document.signatures_consistent());

        info!(
            "Document {} signed by {} ({}/{})",
            fingerprint,
            ctx.caller,
            document.signature_count(),
            document.requested_signers.len()
        );
        Ok(())
    }

    /// Withdraw the caller's signature from a document.
    pub fn revoke_sign(&mut self, ctx: &CallContext, fingerprint: Fingerprint) -> Result<(), VerificationError> {
        let document = self
            .documents
            .get_mut(&fingerprint)
            .ok_or_else(|| fail(VerificationError::InvalidDocument))?;

        let position = document
            .signatures
            .iter()
            .position(|s| s.signer == ctx.caller)
            .ok_or_else(|| fail(VerificationError::SignerDidNotSigned))?;
        if ctx.now > document.verification_deadline {
            return Err(fail(VerificationError::LateToExecute(document.verification_deadline)));
        }

        document.signatures.swap_remove(position);
        debug_assert!(document.signatures_consistent());

        info!("Signature of {} revoked on document {}", ctx.caller, fingerprint);
        Ok(())
    }

    /// Whether the document currently satisfies its quorum rule.
    ///
    /// Unknown documents and documents past their document deadline are never legit.
    pub fn is_document_legit(&self, fingerprint: &Fingerprint, now: Timestamp) -> bool {
        match self.documents.get(fingerprint) {
            Some(document) if now <= document.document_deadline => document.quorum_reached(),
            _ => false,
        }
    }

    pub fn get_document(&self, fingerprint: &Fingerprint) -> Option<&Document> {
        self.documents.get(fingerprint)
    }

    /// Active signatures on a document; empty if the document does not exist.
    pub fn get_signers(&self, fingerprint: &Fingerprint) -> Vec<SignatureRecord> {
        self.documents
            .get(fingerprint)
            .map(|d| d.signatures.clone())
            .unwrap_or_default()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    fn ensure_management(&self, ctx: &CallContext) -> Result<(), VerificationError> {
        if ctx.caller != self.management {
            return Err(fail(VerificationError::CallerIsNotManagement));
        }
        Ok(())
    }
}

impl DocumentCreatorManagement for DocumentVerification {
    fn configure_document_creator(
        &mut self,
        ctx: &CallContext,
        creator: Address,
        amount: u64,
    ) -> Result<(), VerificationError> {
        self.ensure_management(ctx)?;
        self.creators.set(creator, CreatorAllowance::granted(amount));
        info!("Document creator {} configured with allowance {}", creator, amount);
        Ok(())
    }

    fn remove_document_creator(&mut self, ctx: &CallContext, creator: Address) -> Result<(), VerificationError> {
        self.ensure_management(ctx)?;
        self.creators.set(creator, CreatorAllowance::default());
        info!("Document creator {} removed", creator);
        Ok(())
    }

    fn increase_document_creator_allowance(
        &mut self,
        ctx: &CallContext,
        creator: Address,
        delta: u64,
    ) -> Result<(), VerificationError> {
        self.ensure_management(ctx)?;
        let record = self
            .creators
            .active_mut(&creator)
            .ok_or_else(|| fail(VerificationError::DocumentCreatorNotFound))?;
        record.allowance = record
            .allowance
            .checked_add(delta)
            .ok_or_else(|| fail(VerificationError::AllowanceOverflow))?;
        info!("Allowance of {} increased by {} to {}", creator, delta, record.allowance);
        Ok(())
    }

    fn decrease_document_creator_allowance(
        &mut self,
        ctx: &CallContext,
        creator: Address,
        delta: u64,
    ) -> Result<(), VerificationError> {
        self.ensure_management(ctx)?;
        let record = self
            .creators
            .active_mut(&creator)
            .ok_or_else(|| fail(VerificationError::DocumentCreatorNotFound))?;
        if delta > record.allowance {
            return Err(fail(VerificationError::DecrementAmountExceedsAllowance));
        }
        record.allowance -= delta;
        info!("Allowance of {} decreased by {} to {}", creator, delta, record.allowance);
        Ok(())
    }

    fn is_document_creator(&self, creator: &Address) -> bool {
        self.creators.get(creator).is_creator
    }

    fn document_creator_allowance(&self, creator: &Address) -> u64 {
        self.creators.get(creator).allowance
    }
}

fn fail(error: VerificationError) -> VerificationError {
    debug!("Verification call rejected: {}", error);
    error
}

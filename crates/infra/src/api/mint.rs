//! Mint calls: ecash notes.

use fmcd_domain::{
    ClientdError, CombineRequest, CombineResponse, DecodeNotesRequest, DecodeNotesResponse,
    EncodeNotesRequest, EncodeNotesResponse, NotesJson, ReissueRequest, ReissueResponse, Result,
    ScopeOverrides, SpendRequest, SpendResponse, SplitRequest, SplitResponse, ValidateRequest,
    ValidateResponse,
};

use super::client::FedimintClient;
use super::endpoints::Endpoint;

fn federation(federation_id: Option<&str>) -> ScopeOverrides {
    ScopeOverrides::from_options(federation_id.map(str::to_owned), None)
}

impl FedimintClient {
    /// Decode an out-of-band notes string into its JSON form.
    pub async fn decode_notes(&self, notes: &str) -> Result<DecodeNotesResponse> {
        self.call(
            Endpoint::DecodeNotes,
            &DecodeNotesRequest { notes: notes.to_owned() },
            &ScopeOverrides::none(),
        )
        .await
    }

    /// Encode the JSON form of notes back into a notes string.
    pub async fn encode_notes(&self, notes: &NotesJson) -> Result<EncodeNotesResponse> {
        let notes_json_str = serde_json::to_string(notes)
            .map_err(|e| ClientdError::invalid_request(format!("failed to encode notes: {}", e)))?;

        self.call(
            Endpoint::EncodeNotes,
            &EncodeNotesRequest { notes_json_str },
            &ScopeOverrides::none(),
        )
        .await
    }

    /// Claim notes into the wallet.
    pub async fn reissue(&self, notes: &str, federation_id: Option<&str>) -> Result<ReissueResponse> {
        self.call(
            Endpoint::Reissue,
            &ReissueRequest { notes: notes.to_owned() },
            &federation(federation_id),
        )
        .await
    }

    pub async fn spend(
        &self,
        request: SpendRequest,
        federation_id: Option<&str>,
    ) -> Result<SpendResponse> {
        self.call(Endpoint::Spend, &request, &federation(federation_id)).await
    }

    /// Check notes with the federation without claiming them.
    pub async fn validate(
        &self,
        notes: &str,
        federation_id: Option<&str>,
    ) -> Result<ValidateResponse> {
        self.call(
            Endpoint::Validate,
            &ValidateRequest { notes: notes.to_owned() },
            &federation(federation_id),
        )
        .await
    }

    /// Split notes into one notes string per denomination.
    pub async fn split(&self, notes: &str) -> Result<SplitResponse> {
        self.call(Endpoint::Split, &SplitRequest { notes: notes.to_owned() }, &ScopeOverrides::none())
            .await
    }

    pub async fn combine(&self, notes: Vec<String>) -> Result<CombineResponse> {
        self.call(Endpoint::Combine, &CombineRequest { notes_vec: notes }, &ScopeOverrides::none())
            .await
    }
}

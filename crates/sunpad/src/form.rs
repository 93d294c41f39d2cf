//! Token form: raw field capture and status rendering
//!
//! Holds what the user typed, turns it into a [`TokenRequest`] and maps the
//! launchpad's [`FlowState`] onto status lines. Everything else is delegated
//! to [`TokenLaunchpad`].

use crate::{
    core::{CreatedToken, FlowFailure, TokenRequest, ValidationError},
    flow::{FlowState, TokenLaunchpad},
};

/// Field values exactly as entered
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenForm {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: String,
    pub initial_supply: String,
}

impl TokenForm {
    /// Parse the supply field; text fields are checked by [`TokenRequest::validate`]
    pub fn to_request(&self) -> Result<TokenRequest, ValidationError> {
        let supply = self.initial_supply.trim();
        if supply.is_empty() {
            return Err(ValidationError::EmptyField("initial supply"));
        }
        if supply.starts_with('-') {
            return Err(ValidationError::NonPositiveSupply);
        }
        let initial_supply = supply
            .parse::<u64>()
            .map_err(|_| ValidationError::InvalidSupply(supply.to_string()))?;

        Ok(TokenRequest {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            image: self.image.clone(),
            description: self.description.clone(),
            initial_supply,
        })
    }

    /// Submit the form. Rejected outright while another submission runs.
    pub async fn submit(&self, launchpad: &TokenLaunchpad) -> Result<CreatedToken, FlowFailure> {
        if launchpad.is_busy() {
            return Err(ValidationError::Busy.into());
        }
        match self.to_request() {
            Ok(request) => launchpad.create_token(&request).await,
            Err(error) => Err(launchpad.reject(error)),
        }
    }

    /// Whether the submit action should be enabled for `state`
    pub fn can_submit(state: &FlowState) -> bool {
        !state.is_busy()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One notification line for the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub level: StatusLevel,
    pub message: String,
}

impl StatusLine {
    fn new(level: StatusLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Render a flow state as a user-facing status line
pub fn render(state: &FlowState) -> StatusLine {
    match state {
        FlowState::Idle => StatusLine::new(StatusLevel::Info, "Ready"),
        FlowState::Validating => StatusLine::new(StatusLevel::Info, "Checking token details..."),
        FlowState::UploadingMetadata => {
            StatusLine::new(StatusLevel::Info, "Uploading metadata to IPFS...")
        }
        FlowState::SubmittingMintTx { mint } => StatusLine::new(
            StatusLevel::Info,
            format!("Creating mint {}... approve the transaction", mint),
        ),
        FlowState::SubmittingSupplyTx { mint, .. } => StatusLine::new(
            StatusLevel::Info,
            format!("Mint {} created. Minting initial supply...", mint),
        ),
        FlowState::Success(token) => StatusLine::new(
            StatusLevel::Success,
            format!("Token {} created and supply minted", token.mint),
        ),
        FlowState::SupplyFailed { mint, error, .. } => StatusLine::new(
            StatusLevel::Warning,
            format!(
                "Mint {} exists but the initial supply was not minted: {}",
                mint, error
            ),
        ),
        FlowState::Failed(failure) => StatusLine::new(StatusLevel::Error, failure.to_string()),
    }
}

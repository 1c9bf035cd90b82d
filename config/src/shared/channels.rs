use serde::{Deserialize, Serialize};

use crate::shared::ValidationError;

/// Source and sink log channel names for one entity stream job.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ChannelConfig {
    /// Channel carrying raw change-event envelopes for this entity.
    pub source_topic: String,
    /// Channel receiving cleaned records for this entity.
    pub sink_topic: String,
}

impl ChannelConfig {
    fn new(source_topic: &str, sink_topic: &str) -> Self {
        Self {
            source_topic: source_topic.to_string(),
            sink_topic: sink_topic.to_string(),
        }
    }

    fn validate(&self, entity: &str) -> Result<(), ValidationError> {
        if self.source_topic.trim().is_empty() {
            return Err(ValidationError::InvalidFieldValue {
                field: format!("channels.{entity}.source_topic"),
                constraint: "must not be empty".to_string(),
            });
        }

        if self.sink_topic.trim().is_empty() {
            return Err(ValidationError::InvalidFieldValue {
                field: format!("channels.{entity}.sink_topic"),
                constraint: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Per-entity channel configuration for all known stream jobs.
///
/// Defaults follow the upstream CDC connector's naming scheme for source
/// channels (`postgres_server.public.<table>_raw`) and the warehouse loader's
/// expectations for sink channels (`<entity>_transformed`).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ChannelsConfig {
    #[serde(default = "default_reservation_channels")]
    pub reservation: ChannelConfig,
    #[serde(default = "default_profile_guest_channels")]
    pub profile_guest: ChannelConfig,
    #[serde(default = "default_chat_whatsapp_channels")]
    pub chat_whatsapp: ChannelConfig,
    #[serde(default = "default_transaction_resto_channels")]
    pub transaction_resto: ChannelConfig,
}

impl ChannelsConfig {
    /// Validates every per-entity channel pair.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.reservation.validate("reservation")?;
        self.profile_guest.validate("profile_guest")?;
        self.chat_whatsapp.validate("chat_whatsapp")?;
        self.transaction_resto.validate("transaction_resto")?;

        Ok(())
    }
}

impl Default for ChannelsConfig {
    fn default() -> Self {
        Self {
            reservation: default_reservation_channels(),
            profile_guest: default_profile_guest_channels(),
            chat_whatsapp: default_chat_whatsapp_channels(),
            transaction_resto: default_transaction_resto_channels(),
        }
    }
}

fn default_reservation_channels() -> ChannelConfig {
    ChannelConfig::new(
        "postgres_server.public.reservation_raw",
        "reservations_transformed",
    )
}

fn default_profile_guest_channels() -> ChannelConfig {
    ChannelConfig::new(
        "postgres_server.public.profile_guest_raw",
        "profile_guest_transformed",
    )
}

fn default_chat_whatsapp_channels() -> ChannelConfig {
    ChannelConfig::new(
        "postgres_server.public.chat_whatsapp_raw",
        "chat_whatsapp_transformed",
    )
}

fn default_transaction_resto_channels() -> ChannelConfig {
    ChannelConfig::new(
        "postgres_server.public.transaction_resto_raw",
        "transaction_resto_transformed",
    )
}

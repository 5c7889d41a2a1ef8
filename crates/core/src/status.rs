//! Closed text enumerations stored in `TEXT` columns.
//!
//! Each variant maps to exactly one database string and one display label.
//! Values are written as-is: no transition rules are enforced between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

macro_rules! define_text_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = ($text:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The value stored in the database.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Human-readable label for display.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(CoreError::Validation(format!(
                        "Unknown {} value: {other}",
                        stringify!($name)
                    ))),
                }
            }
        }
    };
}

define_text_enum! {
    /// Sales pipeline stage of a lead.
    LeadStatus {
        New = ("new", "New"),
        Contacted = ("contacted", "Contacted"),
        Interested = ("interested", "Interested"),
        AppointmentSet = ("appt_set", "Appt Set"),
        Showed = ("showed", "Showed"),
        ClosedWon = ("closed_won", "Closed Won"),
        ClosedLost = ("closed_lost", "Closed Lost"),
        BadLead = ("bad_lead", "Bad Lead"),
    }
}

define_text_enum! {
    /// How an action item was closed out.
    ResolutionType {
        AppointmentScheduled = ("appointment_scheduled", "Appointment scheduled"),
        FollowupScheduled = ("followup_scheduled", "Follow-up scheduled"),
        NotInterested = ("not_interested", "Not interested"),
        WrongNumber = ("wrong_number", "Wrong number"),
        Dismissed = ("dismissed", "Dismissed"),
    }
}

define_text_enum! {
    /// Campaign run state.
    CampaignStatus {
        Draft = ("draft", "Draft"),
        Active = ("active", "Active"),
        Paused = ("paused", "Paused"),
        Completed = ("completed", "Completed"),
    }
}

define_text_enum! {
    /// Direction of a call, SMS, or email.
    Direction {
        Inbound = ("inbound", "Inbound"),
        Outbound = ("outbound", "Outbound"),
    }
}

define_text_enum! {
    /// Provisioning state of a voice agent.
    AgentStatus {
        Active = ("active", "Active"),
        Pending = ("pending", "Pending"),
    }
}

define_text_enum! {
    /// Membership state of a team member.
    MemberStatus {
        Active = ("active", "Active"),
        Invited = ("invited", "Invited"),
    }
}

/// Resolve a stored value to its display label, passing unknown values through.
///
/// Rows written by other systems may carry values outside the enumeration;
/// those are shown verbatim rather than dropped.
pub fn label_or_raw<T>(raw: &str) -> String
where
    T: FromStr + Copy,
    T: Labelled,
{
    raw.parse::<T>()
        .map(|v| v.display_label().to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Implemented by every enumeration with a display label.
pub trait Labelled {
    fn display_label(self) -> &'static str;
}

macro_rules! impl_labelled {
    ($($name:ident),+) => {
        $(impl Labelled for $name {
            fn display_label(self) -> &'static str {
                self.label()
            }
        })+
    };
}

impl_labelled!(LeadStatus, ResolutionType, CampaignStatus, Direction, AgentStatus, MemberStatus);

//! Widget implementations for the Neumorph toolkit.

mod error;
pub mod toggle;

pub use error::{ConfigError, ToggleError};
pub use toggle::interaction::ActivationSource;
pub use toggle::palette::{NeumorphicPalette, ToggleTheme};
pub use toggle::props::{ToggleProps, DEFAULT_LABEL};
pub use toggle::size::{CssLength, DimensionSet, PixelGeometry, SizePreset, ToggleSize};
pub use toggle::state::{OwnershipMode, ToggleState};
pub use toggle::{ChangeCallback, NeumorphicToggle, ToggleChanged};

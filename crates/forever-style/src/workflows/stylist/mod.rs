//! Chat stylist and the 3D model preview used on product pages.

pub mod conversion;
pub mod responder;
pub mod router;

pub use conversion::{
    convert_image_to_3d, ConversionError, MockModelConverter, ModelConverter, SAMPLE_MODEL_URL,
};
pub use responder::{KeywordStylist, StylistError, StylistReply, StylistTopic, WELCOME_MESSAGE};
pub use router::{stylist_router, ChatRequest, ModelRequest, ModelResponse, StylistState};

//! # solomon-remote - Remote Service Clients
//!
//! The two external collaborators Solomon consumes as opaque HTTP services:
//!
//! - [`store`] -- the JSON document store holding the chat collection and
//!   the settings record, behind the [`DocumentStore`] trait, plus the
//!   [`ChatStore`] gateway that knows the two documents' shapes.
//! - [`persona`] -- the hosted text-generation endpoint that turns a
//!   role-tagged transcript into a future-self reply.
//!
//! Both clients translate transport failures into
//! [`solomon_core::Error::Store`] / [`solomon_core::Error::Persona`]; policy
//! (swallow, surface, default-substitute) lives with the callers.

pub mod persona;
pub mod store;

pub use persona::{build_prompt, PersonaClient, DEFAULT_PERSONA, REPLY_CUE};
pub use store::{ChatStore, DocumentStore, HttpDocumentStore, DEFAULT_COLLECTION};

#[cfg(any(test, feature = "test-helpers"))]
pub use store::MemoryStore;

mod broadcast_pending;
mod collections;
mod mint;
mod mint_document;

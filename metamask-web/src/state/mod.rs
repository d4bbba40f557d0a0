pub mod metamask;

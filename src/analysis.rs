//! Text analysis module for Reword.
//!
//! This module provides the token-level machinery of the paraphrasing
//! pipeline: tokenization and tagging, tag translation, the mutability
//! rules, the token filters that lemmatise, synonymise and reinflect, and
//! the reassembler that turns tokens back into text.

pub mod assembler;
pub mod candidate;
pub mod mutability;
pub mod segmenter;
pub mod tag;
pub mod tagger;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

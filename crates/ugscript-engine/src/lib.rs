// ugscript-engine: conversion between the Uyghur orthographies.
//
// Every conversion is routed through the Common Turkic script (CTS):
// `source -> CTS -> target`. Each non-canonical script contributes one
// inbound stage (into CTS) and one outbound stage (out of CTS); the Uzbek
// Latin variant contributes only an outbound stage.
//
// Layers, leaves first:
// - `substitution`: the sequential token table and the single-pass
//   association map.
// - `rules`: the Arabic-script glottal-stop rules and the Cyrillic case
//   folding and glide digraphs.
// - `tables`: the built-in letter data, bundled into `ScriptTables`.
// - `router`: resolves a (source, target) pair into a `ConversionPath`.
// - `converter`: the `Converter` entry point.

pub mod converter;
pub mod router;
pub mod rules;
pub mod substitution;
pub mod tables;

pub use converter::Converter;
pub use router::{ConversionPath, Stage};
pub use substitution::{AssociationMap, TableError, TokenTable};
pub use tables::ScriptTables;

pub use ugscript_core::{ConversionOptions, ConvertError, ScriptId};

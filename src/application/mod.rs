// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (the end-to-end classification run).
//
// Rules for this layer:
//   - No ML math or model code here
//   - No UI or argument parsing here (that's Layer 1)
//   - No direct network or file access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The load → train → evaluate → classify workflow
pub mod classify_use_case;

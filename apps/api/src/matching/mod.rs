// Job matching: per-job scoring, top-N recommendation assembly, and the prompt a
// model-backed scorer would receive. Scoring backends plug in via `MatchScorer`.

pub mod handlers;
pub mod prompts;
pub mod recommend;
pub mod scorer;

use super::StyleProfile;

/// Aztec-style privacy rollup profile.
pub const AZTEC_PROFILE: StyleProfile = StyleProfile {
    key: "aztec",
    display_name: "Aztec-style privacy rollup",
    hash_bytes: 32,
    note: "Optimised for zk commitments over encrypted state roots.",
};

/// Zama-style FHE compute stack profile.
pub const ZAMA_PROFILE: StyleProfile = StyleProfile {
    key: "zama",
    display_name: "Zama-style FHE compute stack",
    hash_bytes: 48,
    note: "FHE-heavy designs often tolerate slightly larger commitments.",
};

/// Soundness-first protocol lab profile.
pub const SOUNDNESS_PROFILE: StyleProfile = StyleProfile {
    key: "soundness",
    display_name: "Soundness-first protocol lab",
    hash_bytes: 32,
    note: "Prefers simple, standard-sized commitments for verifiable semantics.",
};

//! # CPU Feature Probe
//!
//! Detects the x86 instruction-set extensions the host CPU supports and
//! decides whether it qualifies for the Icelake code path. Detection is
//! separated from the decision so the decision can be checked against
//! synthetic masks.

use bitflags::bitflags;

bitflags! {
    /// Instruction-set extensions, one bit each in probe order.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InstructionSet: u32 {
        const PCLMULQDQ = 1 << 0;
        const SSE42 = 1 << 1;
        const BMI1 = 1 << 2;
        const AVX2 = 1 << 3;
        const BMI2 = 1 << 4;
        const AVX512F = 1 << 5;
        const AVX512DQ = 1 << 6;
        const AVX512CD = 1 << 7;
        const AVX512BW = 1 << 8;
        const AVX512VL = 1 << 9;
        const AVX512VBMI2 = 1 << 10;
        const AVX512VPOPCNTDQ = 1 << 11;
    }
}

/// Extensions an Icelake-class CPU must report.
pub const ICELAKE_REQUIRED: InstructionSet = InstructionSet::BMI1
    .union(InstructionSet::AVX2)
    .union(InstructionSet::BMI2)
    .union(InstructionSet::AVX512BW)
    .union(InstructionSet::AVX512VL)
    .union(InstructionSet::AVX512VBMI2)
    .union(InstructionSet::AVX512VPOPCNTDQ);

/// Queries the running CPU. Non-x86 targets report no extensions.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub fn detect_supported_instruction() -> InstructionSet {
    let probes = [
        (InstructionSet::PCLMULQDQ, is_x86_feature_detected!("pclmulqdq")),
        (InstructionSet::SSE42, is_x86_feature_detected!("sse4.2")),
        (InstructionSet::BMI1, is_x86_feature_detected!("bmi1")),
        (InstructionSet::AVX2, is_x86_feature_detected!("avx2")),
        (InstructionSet::BMI2, is_x86_feature_detected!("bmi2")),
        (InstructionSet::AVX512F, is_x86_feature_detected!("avx512f")),
        (InstructionSet::AVX512DQ, is_x86_feature_detected!("avx512dq")),
        (InstructionSet::AVX512CD, is_x86_feature_detected!("avx512cd")),
        (InstructionSet::AVX512BW, is_x86_feature_detected!("avx512bw")),
        (InstructionSet::AVX512VL, is_x86_feature_detected!("avx512vl")),
        (InstructionSet::AVX512VBMI2, is_x86_feature_detected!("avx512vbmi2")),
        (
            InstructionSet::AVX512VPOPCNTDQ,
            is_x86_feature_detected!("avx512vpopcntdq"),
        ),
    ];
    let detected = probes
        .into_iter()
        .filter(|&(_, present)| present)
        .fold(InstructionSet::empty(), |acc, (flag, _)| acc | flag);
    tracing::debug!(?detected, "cpu features detected");
    detected
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
pub fn detect_supported_instruction() -> InstructionSet {
    tracing::debug!("not an x86 target, no cpu features reported");
    InstructionSet::empty()
}

/// True iff every Icelake extension is present in `mask`.
pub fn supports_icelake(mask: InstructionSet) -> bool {
    mask.contains(ICELAKE_REQUIRED)
}

/// Process exit code of the probe: 1 when the CPU qualifies, 0 otherwise.
pub fn probe_exit_code(mask: InstructionSet) -> u8 {
    let missing = ICELAKE_REQUIRED.difference(mask);
    if missing.is_empty() {
        1
    } else {
        tracing::info!(?missing, "cpu lacks icelake extensions");
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_set_has_seven_extensions() {
        assert_eq!(ICELAKE_REQUIRED.bits().count_ones(), 7);
        assert!(!ICELAKE_REQUIRED.contains(InstructionSet::AVX512F));
        assert!(!ICELAKE_REQUIRED.contains(InstructionSet::SSE42));
    }
}

use imcanvas_cpu::{
    ICELAKE_REQUIRED, InstructionSet, detect_supported_instruction, probe_exit_code,
    supports_icelake,
};

#[test]
fn test_all_required_bits_pass() {
    assert_eq!(probe_exit_code(ICELAKE_REQUIRED), 1);
    assert_eq!(probe_exit_code(InstructionSet::all()), 1);
    assert!(supports_icelake(ICELAKE_REQUIRED));
}

#[test]
fn test_missing_avx512bw_fails() {
    let mask = InstructionSet::all() - InstructionSet::AVX512BW;
    assert_eq!(probe_exit_code(mask), 0);
    assert!(!supports_icelake(mask));
}

#[test]
fn test_each_required_bit_is_necessary() {
    for flag in ICELAKE_REQUIRED.iter() {
        assert_eq!(probe_exit_code(ICELAKE_REQUIRED - flag), 0, "{flag:?} not required");
    }
}

#[test]
fn test_bit_order() {
    assert_eq!(InstructionSet::PCLMULQDQ.bits(), 1);
    assert_eq!(InstructionSet::AVX512BW.bits(), 1 << 8);
    assert_eq!(InstructionSet::AVX512VPOPCNTDQ.bits(), 1 << 11);
    assert_eq!(InstructionSet::all().bits(), 0xFFF);
}

#[test]
fn test_detection_agrees_with_decision() {
    let mask = detect_supported_instruction();
    assert_eq!(probe_exit_code(mask) == 1, supports_icelake(mask));
}

mod interp {
    subleq_tests::interp_bin!(halt, "halt");
    subleq_tests::interp_bin!(hi, "hi");
    subleq_tests::interp_bin!(stars, "stars");
    subleq_tests::interp_bin!(hello, "hello");
}

mod native {
    subleq_tests::native_bin!(halt, "halt");
    subleq_tests::native_bin!(hi, "hi");
    subleq_tests::native_bin!(stars, "stars");
    subleq_tests::native_bin!(hello, "hello");
}

mod test_dispatch;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod test_x86;


#[cfg(all(
    target_arch = "x86_64",
    target_feature = "avx512f",
    target_feature = "vaes"
))]
mod test_widevec;

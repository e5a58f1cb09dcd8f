#[macro_export]
macro_rules! BIT {
    ( $x:expr ) => {
        1 << $x
    };
}

#[macro_export]
macro_rules! BIT_MASK_LEN {
    ( $x:expr ) => {
        $crate::BIT!($x) - 1
    };
}

// bits range: BITS_RNG(4, 5)  0b000111110000,  start from 4, length = 5
#[macro_export]
macro_rules! BIT_RNG {
    ( $s:expr, $e:expr ) => {
        $crate::BIT_MASK_LEN!($e-$s+1) << $s
    };
}

/// Shifts `v` into the field described by mask `m`.
#[macro_export]
macro_rules! MASK_VAL {
    ($m:expr, $v:expr) => (
        ((($v as u32) << ($m as u32).trailing_zeros()) & ($m as u32))
    );

    ($m:expr, $v:expr $(, $extra:expr)*) => (
        $crate::MASK_VAL!($m, $v) | $crate::MASK_VAL!($($extra),*)
    )
}

/// Extracts the field described by mask `m` from `v`.
#[macro_export]
macro_rules! GET_FLD {
    ($m:expr, $v:expr) => (
        ((($v as u32) & ($m as u32)) >> ($m as u32).trailing_zeros())
    );
}

#[macro_export]
macro_rules! BM_SET {
    ($x:expr, $mask:expr) => (
        $x |= $mask
    );
}

#[macro_export]
macro_rules! BM_CLR {
    ($x:expr, $mask:expr) => (
        $x &= !($mask)
    );
}

/// Replaces the field `m` of `x` with `v`, leaving the other bits alone.
#[macro_export]
macro_rules! SET_FLD_V {
    ($x:expr, $m:expr, $v:expr) => (
        $x = ($x & !($m as u32)) | $crate::MASK_VAL!($m, $v)
    );
}

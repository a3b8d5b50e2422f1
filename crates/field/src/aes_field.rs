// Copyright 2024-2025 Irreducible Inc.

/// Low byte of the AES reduction polynomial `x^8 + x^4 + x^3 + x + 1`.
pub const AES_REDUCTION: u8 = 0x1b;

/// Multiplication by `x` ("doubling", `xtime` in FIPS-197).
#[inline(always)]
pub const fn mul_by_x(a: u8) -> u8 {
	(a << 1) ^ ((a >> 7) * AES_REDUCTION)
}

/// Carry-less multiplication modulo the AES polynomial.
pub const fn multiply(lhs: u8, rhs: u8) -> u8 {
	let mut a = lhs;
	let mut b = rhs;
	let mut result = 0;
	while b != 0 {
		if b & 1 == 1 {
			result ^= a;
		}
		a = mul_by_x(a);
		b >>= 1;
	}
	result
}

/// Multiplicative inverse, mapping zero to zero (`a^254`).
pub const fn invert_or_zero(a: u8) -> u8 {
	let mut result = 1;
	let mut base = a;
	let mut exp = 254u8;
	while exp != 0 {
		if exp & 1 == 1 {
			result = multiply(result, base);
		}
		base = multiply(base, base);
		exp >>= 1;
	}
	result
}

const fn sbox_table() -> [u8; 256] {
	let mut table = [0u8; 256];
	let mut i = 0;
	while i < 256 {
		let b = invert_or_zero(i as u8);
		table[i] =
			b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ 0x63;
		i += 1;
	}
	table
}

const fn mul_table(factor: u8) -> [u8; 256] {
	let mut table = [0u8; 256];
	let mut i = 0;
	while i < 256 {
		table[i] = multiply(i as u8, factor);
		i += 1;
	}
	table
}

/// The AES substitution box: field inversion followed by the affine map with constant `0x63`.
pub static SBOX: [u8; 256] = sbox_table();

pub static MUL_2: [u8; 256] = mul_table(0x02);
pub static MUL_3: [u8; 256] = mul_table(0x03);
pub static MUL_9: [u8; 256] = mul_table(0x09);
pub static MUL_11: [u8; 256] = mul_table(0x0b);
pub static MUL_13: [u8; 256] = mul_table(0x0d);
pub static MUL_14: [u8; 256] = mul_table(0x0e);

/// AES key-schedule round constants `x^(i-1)`.
pub const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

#[inline(always)]
pub fn sub_byte(value: u8) -> u8 {
	SBOX[value as usize]
}

/// Multiplies by one of the MDS coefficients, using the precomputed tables for the factors the
/// AES matrices need.
#[inline]
pub fn gf_mul(value: u8, factor: u8) -> u8 {
	match factor {
		0x01 => value,
		0x02 => MUL_2[value as usize],
		0x03 => MUL_3[value as usize],
		0x09 => MUL_9[value as usize],
		0x0b => MUL_11[value as usize],
		0x0d => MUL_13[value as usize],
		0x0e => MUL_14[value as usize],
		_ => multiply(value, factor),
	}
}

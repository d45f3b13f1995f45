use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Attribute, BinOp, Data, DeriveInput, Error, Expr, ExprBinary, ExprCall, ExprLit, Fields, Ident,
    Lit, LitInt, Result, Variant, parse::Parser, parse_macro_input,
};

// =============================================================================
// flags attribute macro
// =============================================================================

/// Turns a fieldless enum into a flag type.
///
/// The enum becomes a `#[repr(transparent)]` newtype over its `repr`, each
/// variant becomes an associated constant of the same name, and the type
/// opts into `nexus_flags::Flags` with the full operator set.
///
/// Options: `disable_complement`, `partial_ord`, `ord`.
#[proc_macro_attribute]
pub fn flags(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr = TokenStream2::from(attr);
    let item = parse_macro_input!(item as DeriveInput);

    match flags_impl(attr, item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn flags_impl(attr: TokenStream2, input: DeriveInput) -> Result<TokenStream2> {
    let options = parse_options(attr)?;

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(Error::new_spanned(
                &input,
                "#[flags] can only be applied to enums",
            ));
        }
    };

    if !input.generics.params.is_empty() || input.generics.where_clause.is_some() {
        return Err(Error::new_spanned(
            &input.generics,
            "#[flags] enums cannot be generic",
        ));
    }

    let repr = parse_repr(&input)?;
    let members: Vec<FlagDef> = data
        .variants
        .iter()
        .map(parse_variant)
        .collect::<Result<_>>()?;

    validate_members(&members, &repr)?;

    let newtype = generate_newtype(&input, &repr);
    let consts = generate_consts(&input.ident, &repr, &members, &options);
    let flags_impl = generate_flags_impl(&input.ident, &repr, &members, &options);
    let fmt_impls = generate_fmt_impls(&input.ident);
    let ord_impls = generate_ord_impls(&input.ident, &options);

    Ok(quote! {
        #newtype
        #consts
        #flags_impl
        #fmt_impls
        #ord_impls
    })
}

// =============================================================================
// Attribute types
// =============================================================================

/// Parsed `#[flags(...)]` arguments
#[derive(Default)]
struct FlagsOptions {
    disable_complement: bool,
    partial_ord: Option<Ident>,
    ord: Option<Ident>,
}

/// One enum variant, as a named flag
struct FlagDef {
    name: Ident,
    attrs: Vec<Attribute>,
    value: Expr,
}

// =============================================================================
// Attribute parsing
// =============================================================================

fn parse_options(attr: TokenStream2) -> Result<FlagsOptions> {
    let mut options = FlagsOptions::default();

    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("disable_complement") {
            options.disable_complement = true;
            Ok(())
        } else if meta.path.is_ident("partial_ord") {
            options.partial_ord = meta.path.get_ident().cloned();
            Ok(())
        } else if meta.path.is_ident("ord") {
            options.ord = meta.path.get_ident().cloned();
            Ok(())
        } else {
            Err(meta.error("expected `disable_complement`, `partial_ord` or `ord`"))
        }
    });

    parser.parse2(attr)?;

    if let (Some(_), Some(ord)) = (&options.partial_ord, &options.ord) {
        return Err(Error::new_spanned(
            ord,
            "`partial_ord` and `ord` cannot be combined",
        ));
    }

    Ok(options)
}

fn parse_repr(input: &DeriveInput) -> Result<Ident> {
    for attr in &input.attrs {
        if attr.path().is_ident("repr") {
            let repr: Ident = attr.parse_args()?;
            match repr.to_string().as_str() {
                "u8" | "u16" | "u32" | "u64" | "u128" | "i8" | "i16" | "i32" | "i64" | "i128" => {
                    return Ok(repr);
                }
                _ => {
                    return Err(Error::new_spanned(
                        repr,
                        "#[flags] requires an integer repr, e.g. #[repr(u8)]",
                    ));
                }
            }
        }
    }

    Err(Error::new_spanned(
        &input.ident,
        "#[flags] requires a #[repr(u8/u16/u32/u64/u128/i8/i16/i32/i64/i128)] attribute",
    ))
}

fn parse_variant(variant: &Variant) -> Result<FlagDef> {
    if !matches!(variant.fields, Fields::Unit) {
        return Err(Error::new_spanned(
            variant,
            "#[flags] variants cannot have fields",
        ));
    }

    let value = match &variant.discriminant {
        Some((_, expr)) => expr.clone(),
        None => {
            return Err(Error::new_spanned(
                variant,
                "#[flags] variants need an explicit value, e.g. `A = nth_bit(0)`",
            ));
        }
    };

    Ok(FlagDef {
        name: variant.ident.clone(),
        attrs: variant.attrs.clone(),
        value,
    })
}

// =============================================================================
// Helpers
// =============================================================================

fn repr_bits(repr: &Ident) -> u32 {
    match repr.to_string().as_str() {
        "u8" | "i8" => 8,
        "u16" | "i16" => 16,
        "u32" | "i32" => 32,
        "u64" | "i64" => 64,
        "u128" | "i128" => 128,
        _ => 0,
    }
}

fn lit_int(expr: &Expr) -> Option<&LitInt> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => Some(lit),
        Expr::Paren(paren) => lit_int(&paren.expr),
        Expr::Group(group) => lit_int(&group.expr),
        _ => None,
    }
}

/// Bit index of `nth_bit(N)` or `1 << N` with a literal `N`.
fn literal_bit_index(expr: &Expr) -> Result<Option<(&LitInt, u32)>> {
    match expr {
        Expr::Call(ExprCall { func, args, .. }) if args.len() == 1 => {
            let is_nth_bit = matches!(
                func.as_ref(),
                Expr::Path(path) if path.path.segments.last().is_some_and(|s| s.ident == "nth_bit")
            );
            match (is_nth_bit, lit_int(&args[0])) {
                (true, Some(lit)) => Ok(Some((lit, lit.base10_parse()?))),
                _ => Ok(None),
            }
        }
        Expr::Binary(ExprBinary {
            left, op, right, ..
        }) if matches!(op, BinOp::Shl(_)) => {
            let one = lit_int(left).map(|lit| lit.base10_digits() == "1");
            match (one, lit_int(right)) {
                (Some(true), Some(lit)) => Ok(Some((lit, lit.base10_parse()?))),
                _ => Ok(None),
            }
        }
        Expr::Paren(paren) => literal_bit_index(&paren.expr),
        _ => Ok(None),
    }
}

/// Widens unsuffixed literals to `u128` so the final `as` cast truncates
/// instead of overflowing `i32` (`1 << 40`, `0x80` in an `i8`).
fn widen_literals(expr: &Expr) -> TokenStream2 {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) if lit.suffix().is_empty() => {
            let wide = LitInt::new(&format!("{}u128", lit.base10_digits()), lit.span());
            quote! { #wide }
        }
        Expr::Binary(ExprBinary {
            left, op, right, ..
        }) => match op {
            BinOp::Shl(_) | BinOp::Shr(_) => {
                let left = widen_literals(left);
                quote! { #left #op #right }
            }
            BinOp::BitOr(_) | BinOp::BitAnd(_) | BinOp::BitXor(_) => {
                let left = widen_literals(left);
                let right = widen_literals(right);
                quote! { #left #op #right }
            }
            _ => quote! { #expr },
        },
        Expr::Paren(paren) => {
            let inner = widen_literals(&paren.expr);
            quote! { (#inner) }
        }
        _ => quote! { #expr },
    }
}

// =============================================================================
// Validation
// =============================================================================

fn validate_members(members: &[FlagDef], repr: &Ident) -> Result<()> {
    let bits = repr_bits(repr);

    for member in members {
        validate_value(&member.value, bits, repr)?;
    }

    Ok(())
}

/// Checks every literal operand of a `|`, `&` or `^` chain against the repr
/// width. Anything that isn't a literal, `nth_bit(N)` or `1 << N` is left to
/// the compiler.
fn validate_value(expr: &Expr, bits: u32, repr: &Ident) -> Result<()> {
    if let Some((lit, bit)) = literal_bit_index(expr)? {
        if bit >= bits {
            return Err(Error::new_spanned(
                lit,
                format!("flag bit {} exceeds {} bits of {}", bit, bits, repr),
            ));
        }
        return Ok(());
    }

    // Signed reprs accept their unsigned bit pattern too (0x80 for i8)
    if let Some(lit) = lit_int(expr) {
        let value: u128 = lit.base10_parse()?;
        if bits < 128 && value >> bits != 0 {
            return Err(Error::new_spanned(
                lit,
                format!("flag value {} exceeds {} bits of {}", value, bits, repr),
            ));
        }
        return Ok(());
    }

    match expr {
        Expr::Binary(ExprBinary {
            left, op, right, ..
        }) if matches!(op, BinOp::BitOr(_) | BinOp::BitAnd(_) | BinOp::BitXor(_)) => {
            validate_value(left, bits, repr)?;
            validate_value(right, bits, repr)
        }
        Expr::Paren(paren) => validate_value(&paren.expr, bits, repr),
        Expr::Group(group) => validate_value(&group.expr, bits, repr),
        _ => Ok(()),
    }
}

// =============================================================================
// Codegen
// =============================================================================

fn generate_newtype(input: &DeriveInput, repr: &Ident) -> TokenStream2 {
    let vis = &input.vis;
    let name = &input.ident;
    let attrs = input.attrs.iter().filter(|a| !a.path().is_ident("repr"));

    quote! {
        #(#attrs)*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(transparent)]
        #vis struct #name(#repr);
    }
}

fn generate_consts(
    name: &Ident,
    repr: &Ident,
    members: &[FlagDef],
    options: &FlagsOptions,
) -> TokenStream2 {
    let consts = members.iter().map(|m| {
        let FlagDef {
            name: flag_name,
            attrs,
            value,
        } = m;
        let value = widen_literals(value);
        quote! {
            #(#attrs)*
            pub const #flag_name: Self = Self((#value) as #repr);
        }
    });

    // `!` yields a `Complement` unless it was disabled, so only then is a
    // const complement the same type.
    let complement = if options.disable_complement {
        quote! {
            /// `!self`, usable in const context.
            #[inline]
            #[must_use]
            pub const fn complement(self) -> Self {
                Self(!self.0)
            }
        }
    } else {
        TokenStream2::new()
    };

    quote! {
        #[allow(non_upper_case_globals)]
        impl #name {
            #(#consts)*

            /// The value with no bits set.
            #[inline]
            pub const fn empty() -> Self {
                Self(0)
            }

            /// Underlying bit pattern.
            #[inline]
            pub const fn bits(self) -> #repr {
                self.0
            }

            /// Reinterprets a bit pattern.
            #[inline]
            pub const fn from_bits(bits: #repr) -> Self {
                Self(bits)
            }

            /// `self | other`, usable in const context.
            #[inline]
            #[must_use]
            pub const fn union(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }

            /// `self & other`, usable in const context.
            #[inline]
            #[must_use]
            pub const fn intersection(self, other: Self) -> Self {
                Self(self.0 & other.0)
            }

            /// `self ^ other`, usable in const context.
            #[inline]
            #[must_use]
            pub const fn symmetric_difference(self, other: Self) -> Self {
                Self(self.0 ^ other.0)
            }

            /// `self & !other`, usable in const context.
            #[inline]
            #[must_use]
            pub const fn difference(self, other: Self) -> Self {
                Self(self.0 & !other.0)
            }

            #complement
        }
    }
}

fn generate_flags_impl(
    name: &Ident,
    repr: &Ident,
    members: &[FlagDef],
    options: &FlagsOptions,
) -> TokenStream2 {
    let named = members.iter().map(|m| {
        let flag_name = &m.name;
        let flag_str = flag_name.to_string();
        quote! { (#flag_str, #name::#flag_name), }
    });

    let ops = if options.disable_complement {
        quote! { nexus_flags::__impl_ops!(#name, disable_complement); }
    } else {
        quote! { nexus_flags::__impl_ops!(#name); }
    };

    quote! {
        impl nexus_flags::Flags for #name {
            type Bits = #repr;

            const NAMED: &'static [(&'static str, Self)] = &[#(#named)*];

            #[inline]
            fn bits(self) -> #repr {
                self.0
            }

            #[inline]
            fn from_bits(bits: #repr) -> Self {
                Self(bits)
            }
        }

        #ops
    }
}

fn generate_fmt_impls(name: &Ident) -> TokenStream2 {
    let name_str = name.to_string();

    quote! {
        impl ::core::fmt::Debug for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                nexus_flags::debug_flags(f, #name_str, *self)
            }
        }

        impl ::core::fmt::Binary for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Binary::fmt(&self.0, f)
            }
        }

        impl ::core::fmt::LowerHex for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::LowerHex::fmt(&self.0, f)
            }
        }

        impl ::core::fmt::UpperHex for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::UpperHex::fmt(&self.0, f)
            }
        }
    }
}

fn generate_ord_impls(name: &Ident, options: &FlagsOptions) -> TokenStream2 {
    if options.partial_ord.is_some() {
        quote! {
            impl ::core::cmp::PartialOrd for #name {
                #[inline]
                fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                    nexus_flags::partial_order(*self, *other)
                }
            }
        }
    } else if options.ord.is_some() {
        quote! {
            impl ::core::cmp::PartialOrd for #name {
                #[inline]
                fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                    ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
                }
            }

            impl ::core::cmp::Ord for #name {
                #[inline]
                fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                    nexus_flags::total_order(*self, *other)
                }
            }
        }
    } else {
        TokenStream2::new()
    }
}

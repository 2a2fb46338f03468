//! Fixed corner encodings: zero register, stack pointer and immediate
//! forms that random operand draws would rarely or never produce.

/// (call notation, assembler notation)
pub const SPECIAL_CASES: &[(&str, &str)] = &[
    ("__ ccmn(zr, zr, 3u, Assembler::LE);", "ccmn\txzr, xzr, #3, LE"),
    ("__ ccmnw(zr, zr, 5u, Assembler::EQ);", "ccmn\twzr, wzr, #5, EQ"),
    ("__ ccmp(zr, 1, 4u, Assembler::NE);", "ccmp\txzr, 1, #4, NE"),
    ("__ ccmpw(zr, 2, 2, Assembler::GT);", "ccmp\twzr, 2, #2, GT"),
    ("__ extr(zr, zr, zr, 0);", "extr\txzr, xzr, xzr, 0"),
    ("__ stlxp(r0, zr, zr, sp);", "stlxp\tw0, xzr, xzr, [sp]"),
    ("__ stlxpw(r2, zr, zr, r3);", "stlxp\tw2, wzr, wzr, [x3]"),
    ("__ stxp(r4, zr, zr, r5);", "stxp\tw4, xzr, xzr, [x5]"),
    ("__ stxpw(r6, zr, zr, sp);", "stxp\tw6, wzr, wzr, [sp]"),
    ("__ dup(v0, __ T16B, zr);", "dup\tv0.16b, wzr"),
    ("__ dup(v0, __ S, v1);", "dup\ts0, v1.s[0]"),
    ("__ mov(v1, __ D, 0, zr);", "mov\tv1.d[0], xzr"),
    ("__ mov(v1, __ S, 1, zr);", "mov\tv1.s[1], wzr"),
    ("__ mov(v1, __ H, 2, zr);", "mov\tv1.h[2], wzr"),
    ("__ mov(v1, __ B, 3, zr);", "mov\tv1.b[3], wzr"),
    ("__ smov(r0, v1, __ S, 0);", "smov\tx0, v1.s[0]"),
    ("__ smov(r0, v1, __ H, 1);", "smov\tx0, v1.h[1]"),
    ("__ smov(r0, v1, __ B, 2);", "smov\tx0, v1.b[2]"),
    ("__ umov(r0, v1, __ D, 0);", "umov\tx0, v1.d[0]"),
    ("__ umov(r0, v1, __ S, 1);", "umov\tw0, v1.s[1]"),
    ("__ umov(r0, v1, __ H, 2);", "umov\tw0, v1.h[2]"),
    ("__ umov(r0, v1, __ B, 3);", "umov\tw0, v1.b[3]"),
    ("__ fmovhid(r0, v1);", "fmov\tx0, v1.d[1]"),
    ("__ fmovs(v9, __ T2S, 0.5f);", "fmov\tv9.2s, 0.5"),
    ("__ fmovd(v14, __ T2D, 0.5f);", "fmov\tv14.2d, 0.5"),
    ("__ ld1(v31, v0, __ T2D, Address(__ post(r1, r0)));", "ld1\t{v31.2d, v0.2d}, [x1], x0"),
    ("__ fcvtzs(v0, __ T2S, v1);", "fcvtzs\tv0.2s, v1.2s"),
    ("__ fcvtas(v2, __ T4S, v3);", "fcvtas\tv2.4s, v3.4s"),
    ("__ fcvtms(v4, __ T2D, v5);", "fcvtms\tv4.2d, v5.2d"),
    // SVE
    ("__ sve_cpy(z0, __ S, p0, v1);", "mov\tz0.s, p0/m, s1"),
    ("__ sve_cpy(z0, __ B, p0, 127, true);", "mov\tz0.b, p0/m, 127"),
    ("__ sve_cpy(z1, __ H, p0, -128, true);", "mov\tz1.h, p0/m, -128"),
    ("__ sve_cpy(z2, __ S, p0, 32512, true);", "mov\tz2.s, p0/m, 32512"),
    ("__ sve_cpy(z5, __ D, p0, -32768, false);", "mov\tz5.d, p0/z, -32768"),
    ("__ sve_cpy(z10, __ B, p0, -1, false);", "mov\tz10.b, p0/z, -1"),
    ("__ sve_cpy(z11, __ S, p0, -1, false);", "mov\tz11.s, p0/z, -1"),
    ("__ sve_inc(r0, __ S);", "incw\tx0"),
    ("__ sve_dec(r1, __ H);", "dech\tx1"),
    ("__ sve_lsl(z0, __ B, z1, 7);", "lsl\tz0.b, z1.b, #7"),
    ("__ sve_lsl(z21, __ H, z1, 15);", "lsl\tz21.h, z1.h, #15"),
    ("__ sve_lsl(z0, __ S, z1, 31);", "lsl\tz0.s, z1.s, #31"),
    ("__ sve_lsl(z0, __ D, z1, 63);", "lsl\tz0.d, z1.d, #63"),
    ("__ sve_lsr(z0, __ B, z1, 7);", "lsr\tz0.b, z1.b, #7"),
    ("__ sve_asr(z0, __ H, z11, 15);", "asr\tz0.h, z11.h, #15"),
    ("__ sve_lsr(z30, __ S, z1, 31);", "lsr\tz30.s, z1.s, #31"),
    ("__ sve_asr(z0, __ D, z1, 63);", "asr\tz0.d, z1.d, #63"),
    ("__ sve_lsl(z0, __ B, p0, 0);", "lsl\tz0.b, p0/m, z0.b, #0"),
    ("__ sve_lsl(z0, __ B, p0, 5);", "lsl\tz0.b, p0/m, z0.b, #5"),
    ("__ sve_lsl(z1, __ H, p1, 15);", "lsl\tz1.h, p1/m, z1.h, #15"),
    ("__ sve_lsl(z2, __ S, p2, 31);", "lsl\tz2.s, p2/m, z2.s, #31"),
    ("__ sve_lsl(z3, __ D, p3, 63);", "lsl\tz3.d, p3/m, z3.d, #63"),
    ("__ sve_lsr(z0, __ B, p0, 1);", "lsr\tz0.b, p0/m, z0.b, #1"),
    ("__ sve_lsr(z0, __ B, p0, 8);", "lsr\tz0.b, p0/m, z0.b, #8"),
    ("__ sve_lsr(z1, __ H, p1, 15);", "lsr\tz1.h, p1/m, z1.h, #15"),
    ("__ sve_lsr(z2, __ S, p2, 7);", "lsr\tz2.s, p2/m, z2.s, #7"),
    ("__ sve_lsr(z2, __ S, p2, 31);", "lsr\tz2.s, p2/m, z2.s, #31"),
    ("__ sve_lsr(z3, __ D, p3, 63);", "lsr\tz3.d, p3/m, z3.d, #63"),
    ("__ sve_asr(z0, __ B, p0, 1);", "asr\tz0.b, p0/m, z0.b, #1"),
    ("__ sve_asr(z0, __ B, p0, 7);", "asr\tz0.b, p0/m, z0.b, #7"),
    ("__ sve_asr(z1, __ H, p1, 5);", "asr\tz1.h, p1/m, z1.h, #5"),
    ("__ sve_asr(z1, __ H, p1, 15);", "asr\tz1.h, p1/m, z1.h, #15"),
    ("__ sve_asr(z2, __ S, p2, 31);", "asr\tz2.s, p2/m, z2.s, #31"),
    ("__ sve_asr(z3, __ D, p3, 63);", "asr\tz3.d, p3/m, z3.d, #63"),
    ("__ sve_addvl(sp, r0, 31);", "addvl\tsp, x0, #31"),
    ("__ sve_addpl(r1, sp, -32);", "addpl\tx1, sp, -32"),
    ("__ sve_cntp(r8, __ B, p0, p1);", "cntp\tx8, p0, p1.b"),
    ("__ sve_dup(z0, __ B, 127);", "dup\tz0.b, 127"),
    ("__ sve_dup(z1, __ H, -128);", "dup\tz1.h, -128"),
    ("__ sve_dup(z2, __ S, 32512);", "dup\tz2.s, 32512"),
    ("__ sve_dup(z7, __ D, -32768);", "dup\tz7.d, -32768"),
    ("__ sve_dup(z10, __ B, -1);", "dup\tz10.b, -1"),
    ("__ sve_dup(z11, __ S, -1);", "dup\tz11.s, -1"),
    ("__ sve_ld1b(z0, __ B, p0, Address(sp));", "ld1b\t{z0.b}, p0/z, [sp]"),
    ("__ sve_ld1b(z0, __ H, p1, Address(sp));", "ld1b\t{z0.h}, p1/z, [sp]"),
    ("__ sve_ld1b(z0, __ S, p2, Address(sp, r8));", "ld1b\t{z0.s}, p2/z, [sp, x8]"),
    ("__ sve_ld1b(z0, __ D, p3, Address(sp, 7));", "ld1b\t{z0.d}, p3/z, [sp, #7, MUL VL]"),
    ("__ sve_ld1h(z10, __ H, p1, Address(sp, -8));", "ld1h\t{z10.h}, p1/z, [sp, #-8, MUL VL]"),
    ("__ sve_ld1w(z20, __ S, p2, Address(r0, 7));", "ld1w\t{z20.s}, p2/z, [x0, #7, MUL VL]"),
    ("__ sve_ld1b(z30, __ B, p3, Address(sp, r8));", "ld1b\t{z30.b}, p3/z, [sp, x8]"),
    ("__ sve_ld1w(z0, __ S, p4, Address(sp, r28));", "ld1w\t{z0.s}, p4/z, [sp, x28, LSL #2]"),
    ("__ sve_ld1d(z11, __ D, p5, Address(r0, r1));", "ld1d\t{z11.d}, p5/z, [x0, x1, LSL #3]"),
    ("__ sve_st1b(z22, __ B, p6, Address(sp));", "st1b\t{z22.b}, p6, [sp]"),
    ("__ sve_st1b(z31, __ B, p7, Address(sp, -8));", "st1b\t{z31.b}, p7, [sp, #-8, MUL VL]"),
    ("__ sve_st1b(z0, __ H, p1, Address(sp));", "st1b\t{z0.h}, p1, [sp]"),
    ("__ sve_st1b(z0, __ S, p2, Address(sp, r8));", "st1b\t{z0.s}, p2, [sp, x8]"),
    ("__ sve_st1b(z0, __ D, p3, Address(sp));", "st1b\t{z0.d}, p3, [sp]"),
    ("__ sve_st1w(z0, __ S, p1, Address(r0, 7));", "st1w\t{z0.s}, p1, [x0, #7, MUL VL]"),
    ("__ sve_st1b(z0, __ B, p2, Address(sp, r1));", "st1b\t{z0.b}, p2, [sp, x1]"),
    ("__ sve_st1h(z0, __ H, p3, Address(sp, r8));", "st1h\t{z0.h}, p3, [sp, x8, LSL #1]"),
    ("__ sve_st1d(z0, __ D, p4, Address(r0, r17));", "st1d\t{z0.d}, p4, [x0, x17, LSL #3]"),
    ("__ sve_ldr(z0, Address(sp));", "ldr\tz0, [sp]"),
    ("__ sve_ldr(z31, Address(sp, -256));", "ldr\tz31, [sp, #-256, MUL VL]"),
    ("__ sve_str(z8, Address(r8, 255));", "str\tz8, [x8, #255, MUL VL]"),
    ("__ sve_cntb(r9);", "cntb\tx9"),
    ("__ sve_cnth(r10);", "cnth\tx10"),
    ("__ sve_cntw(r11);", "cntw\tx11"),
    ("__ sve_cntd(r12);", "cntd\tx12"),
    ("__ sve_brka(p2, p0, p2, false);", "brka\tp2.b, p0/z, p2.b"),
    ("__ sve_brka(p1, p2, p3, true);", "brka\tp1.b, p2/m, p3.b"),
    ("__ sve_brkb(p1, p2, p3, false);", "brkb\tp1.b, p2/z, p3.b"),
    ("__ sve_brkb(p2, p3, p4, true);", "brkb\tp2.b, p3/m, p4.b"),
    ("__ sve_rev(p0, __ B, p1);", "rev\tp0.b, p1.b"),
    ("__ sve_rev(p1, __ H, p2);", "rev\tp1.h, p2.h"),
    ("__ sve_rev(p2, __ S, p3);", "rev\tp2.s, p3.s"),
    ("__ sve_rev(p3, __ D, p4);", "rev\tp3.d, p4.d"),
    ("__ sve_incp(r0, __ B, p2);", "incp\tx0, p2.b"),
    ("__ sve_whilelt(p0, __ B, r1, r28);", "whilelt\tp0.b, x1, x28"),
    ("__ sve_whilele(p2, __ H, r11, r8);", "whilele\tp2.h, x11, x8"),
    ("__ sve_whilelo(p3, __ S, r7, r2);", "whilelo\tp3.s, x7, x2"),
    ("__ sve_whilels(p4, __ D, r17, r10);", "whilels\tp4.d, x17, x10"),
    ("__ sve_whileltw(p1, __ B, r1, r28);", "whilelt\tp1.b, w1, w28"),
    ("__ sve_whilelew(p2, __ H, r11, r8);", "whilele\tp2.h, w11, w8"),
    ("__ sve_whilelow(p3, __ S, r7, r2);", "whilelo\tp3.s, w7, w2"),
    ("__ sve_whilelsw(p4, __ D, r17, r10);", "whilels\tp4.d, w17, w10"),
    ("__ sve_sel(z0, __ B, p0, z1, z2);", "sel\tz0.b, p0, z1.b, z2.b"),
    ("__ sve_sel(z4, __ D, p0, z5, z6);", "sel\tz4.d, p0, z5.d, z6.d"),
    ("__ sve_cmp(Assembler::EQ, p1, __ B, p0, z0, z1);", "cmpeq\tp1.b, p0/z, z0.b, z1.b"),
    ("__ sve_cmp(Assembler::NE, p1, __ H, p0, z2, z3);", "cmpne\tp1.h, p0/z, z2.h, z3.h"),
    ("__ sve_cmp(Assembler::GE, p1, __ S, p2, z4, z5);", "cmpge\tp1.s, p2/z, z4.s, z5.s"),
    ("__ sve_cmp(Assembler::GT, p1, __ D, p3, z6, z7);", "cmpgt\tp1.d, p3/z, z6.d, z7.d"),
    ("__ sve_cmp(Assembler::HI, p1, __ S, p2, z4, z5);", "cmphi\tp1.s, p2/z, z4.s, z5.s"),
    ("__ sve_cmp(Assembler::HS, p1, __ D, p3, z6, z7);", "cmphs\tp1.d, p3/z, z6.d, z7.d"),
    ("__ sve_cmp(Assembler::EQ, p1, __ B, p4, z0, 15);", "cmpeq\tp1.b, p4/z, z0.b, #15"),
    ("__ sve_cmp(Assembler::NE, p1, __ H, p0, z2, -16);", "cmpne\tp1.h, p0/z, z2.h, #-16"),
    ("__ sve_cmp(Assembler::LE, p1, __ S, p1, z4, 0);", "cmple\tp1.s, p1/z, z4.s, #0"),
    ("__ sve_cmp(Assembler::LT, p1, __ D, p2, z6, -1);", "cmplt\tp1.d, p2/z, z6.d, #-1"),
    ("__ sve_cmp(Assembler::GE, p1, __ S, p3, z4, 5);", "cmpge\tp1.s, p3/z, z4.s, #5"),
    ("__ sve_cmp(Assembler::GT, p1, __ B, p4, z6, -2);", "cmpgt\tp1.b, p4/z, z6.b, #-2"),
    ("__ sve_fcm(Assembler::EQ, p1, __ S, p0, z0, z1);", "fcmeq\tp1.s, p0/z, z0.s, z1.s"),
    ("__ sve_fcm(Assembler::NE, p1, __ D, p0, z2, z3);", "fcmne\tp1.d, p0/z, z2.d, z3.d"),
    ("__ sve_fcm(Assembler::GT, p1, __ S, p2, z4, z5);", "fcmgt\tp1.s, p2/z, z4.s, z5.s"),
    ("__ sve_fcm(Assembler::GE, p1, __ D, p3, z6, z7);", "fcmge\tp1.d, p3/z, z6.d, z7.d"),
    ("__ sve_uunpkhi(z0, __ H, z1);", "uunpkhi\tz0.h, z1.b"),
    ("__ sve_uunpklo(z4, __ S, z5);", "uunpklo\tz4.s, z5.h"),
    ("__ sve_sunpkhi(z6, __ D, z7);", "sunpkhi\tz6.d, z7.s"),
    ("__ sve_sunpklo(z10, __ H, z11);", "sunpklo\tz10.h, z11.b"),
    ("__ sve_scvtf(z1, __ D, p0, z0, __ S);", "scvtf\tz1.d, p0/m, z0.s"),
    ("__ sve_scvtf(z3, __ D, p1, z2, __ D);", "scvtf\tz3.d, p1/m, z2.d"),
    ("__ sve_scvtf(z6, __ S, p2, z1, __ D);", "scvtf\tz6.s, p2/m, z1.d"),
    ("__ sve_scvtf(z6, __ S, p3, z1, __ S);", "scvtf\tz6.s, p3/m, z1.s"),
    ("__ sve_scvtf(z6, __ H, p3, z1, __ S);", "scvtf\tz6.h, p3/m, z1.s"),
    ("__ sve_scvtf(z6, __ H, p3, z1, __ D);", "scvtf\tz6.h, p3/m, z1.d"),
    ("__ sve_scvtf(z6, __ H, p3, z1, __ H);", "scvtf\tz6.h, p3/m, z1.h"),
    ("__ sve_fcvt(z5, __ D, p3, z4, __ S);", "fcvt\tz5.d, p3/m, z4.s"),
    ("__ sve_fcvt(z1, __ S, p3, z0, __ D);", "fcvt\tz1.s, p3/m, z0.d"),
    ("__ sve_fcvt(z5, __ S, p3, z4, __ H);", "fcvt\tz5.s, p3/m, z4.h"),
    ("__ sve_fcvt(z1, __ H, p3, z0, __ S);", "fcvt\tz1.h, p3/m, z0.s"),
    ("__ sve_fcvt(z5, __ D, p3, z4, __ H);", "fcvt\tz5.d, p3/m, z4.h"),
    ("__ sve_fcvt(z1, __ H, p3, z0, __ D);", "fcvt\tz1.h, p3/m, z0.d"),
    ("__ sve_fcvtzs(z19, __ D, p2, z1, __ D);", "fcvtzs\tz19.d, p2/m, z1.d"),
    ("__ sve_fcvtzs(z9, __ S, p1, z8, __ S);", "fcvtzs\tz9.s, p1/m, z8.s"),
    ("__ sve_fcvtzs(z1, __ S, p2, z0, __ D);", "fcvtzs\tz1.s, p2/m, z0.d"),
    ("__ sve_fcvtzs(z1, __ D, p3, z0, __ S);", "fcvtzs\tz1.d, p3/m, z0.s"),
    ("__ sve_fcvtzs(z1, __ S, p4, z18, __ H);", "fcvtzs\tz1.s, p4/m, z18.h"),
    ("__ sve_lasta(r0, __ B, p0, z15);", "lasta\tw0, p0, z15.b"),
    ("__ sve_lastb(r1, __ B, p1, z16);", "lastb\tw1, p1, z16.b"),
    ("__ sve_lasta(v0, __ B, p0, z15);", "lasta\tb0, p0, z15.b"),
    ("__ sve_lastb(v1, __ B, p1, z16);", "lastb\tb1, p1, z16.b"),
    ("__ sve_index(z6, __ S, 1, 1);", "index\tz6.s, #1, #1"),
    ("__ sve_index(z6, __ B, r5, 2);", "index\tz6.b, w5, #2"),
    ("__ sve_index(z6, __ H, r5, 3);", "index\tz6.h, w5, #3"),
    ("__ sve_index(z6, __ S, r5, 4);", "index\tz6.s, w5, #4"),
    ("__ sve_index(z7, __ D, r5, 5);", "index\tz7.d, x5, #5"),
    ("__ sve_cpy(z7, __ H, p3, r5);", "cpy\tz7.h, p3/m, w5"),
    ("__ sve_tbl(z16, __ S, z17, z18);", "tbl\tz16.s, {z17.s}, z18.s"),
    ("__ sve_ld1w_gather(z15, p0, r5, z16);", "ld1w\t{z15.s}, p0/z, [x5, z16.s, uxtw #2]"),
    ("__ sve_ld1d_gather(z15, p0, r5, z16);", "ld1d\t{z15.d}, p0/z, [x5, z16.d, uxtw #3]"),
    ("__ sve_st1w_scatter(z15, p0, r5, z16);", "st1w\t{z15.s}, p0, [x5, z16.s, uxtw #2]"),
    ("__ sve_st1d_scatter(z15, p0, r5, z16);", "st1d\t{z15.d}, p0, [x5, z16.d, uxtw #3]"),
    ("__ sve_and(p0, p1, p2, p3);", "and\tp0.b, p1/z, p2.b, p3.b"),
    ("__ sve_ands(p4, p5, p6, p0);", "ands\tp4.b, p5/z, p6.b, p0.b"),
    ("__ sve_eor(p0, p1, p2, p3);", "eor\tp0.b, p1/z, p2.b, p3.b"),
    ("__ sve_eors(p5, p6, p0, p1);", "eors\tp5.b, p6/z, p0.b, p1.b"),
    ("__ sve_orr(p0, p1, p2, p3);", "orr\tp0.b, p1/z, p2.b, p3.b"),
    ("__ sve_orrs(p9, p1, p4, p5);", "orrs\tp9.b, p1/z, p4.b, p5.b"),
    ("__ sve_bic(p10, p7, p9, p11);", "bic\tp10.b, p7/z, p9.b, p11.b"),
    ("__ sve_ptest(p7, p1);", "ptest\tp7, p1.b"),
    ("__ sve_ptrue(p1, __ B);", "ptrue\tp1.b"),
    ("__ sve_ptrue(p1, __ B, 0b00001);", "ptrue\tp1.b, vl1"),
    ("__ sve_ptrue(p1, __ B, 0b00101);", "ptrue\tp1.b, vl5"),
    ("__ sve_ptrue(p1, __ B, 0b01001);", "ptrue\tp1.b, vl16"),
    ("__ sve_ptrue(p1, __ B, 0b01101);", "ptrue\tp1.b, vl256"),
    ("__ sve_ptrue(p2, __ H);", "ptrue\tp2.h"),
    ("__ sve_ptrue(p2, __ H, 0b00010);", "ptrue\tp2.h, vl2"),
    ("__ sve_ptrue(p2, __ H, 0b00110);", "ptrue\tp2.h, vl6"),
    ("__ sve_ptrue(p2, __ H, 0b01010);", "ptrue\tp2.h, vl32"),
    ("__ sve_ptrue(p3, __ S);", "ptrue\tp3.s"),
    ("__ sve_ptrue(p3, __ S, 0b00011);", "ptrue\tp3.s, vl3"),
    ("__ sve_ptrue(p3, __ S, 0b00111);", "ptrue\tp3.s, vl7"),
    ("__ sve_ptrue(p3, __ S, 0b01011);", "ptrue\tp3.s, vl64"),
    ("__ sve_ptrue(p4, __ D);", "ptrue\tp4.d"),
    ("__ sve_ptrue(p4, __ D, 0b00100);", "ptrue\tp4.d, vl4"),
    ("__ sve_ptrue(p4, __ D, 0b01000);", "ptrue\tp4.d, vl8"),
    ("__ sve_ptrue(p4, __ D, 0b01100);", "ptrue\tp4.d, vl128"),
    ("__ sve_pfalse(p7);", "pfalse\tp7.b"),
    ("__ sve_uzp1(p0, __ B, p0, p1);", "uzp1\tp0.b, p0.b, p1.b"),
    ("__ sve_uzp1(p0, __ H, p0, p1);", "uzp1\tp0.h, p0.h, p1.h"),
    ("__ sve_uzp1(p0, __ S, p0, p1);", "uzp1\tp0.s, p0.s, p1.s"),
    ("__ sve_uzp1(p0, __ D, p0, p1);", "uzp1\tp0.d, p0.d, p1.d"),
    ("__ sve_uzp2(p0, __ B, p0, p1);", "uzp2\tp0.b, p0.b, p1.b"),
    ("__ sve_uzp2(p0, __ H, p0, p1);", "uzp2\tp0.h, p0.h, p1.h"),
    ("__ sve_uzp2(p0, __ S, p0, p1);", "uzp2\tp0.s, p0.s, p1.s"),
    ("__ sve_uzp2(p0, __ D, p0, p1);", "uzp2\tp0.d, p0.d, p1.d"),
    ("__ sve_punpklo(p1, p0);", "punpklo\tp1.h, p0.b"),
    ("__ sve_punpkhi(p1, p0);", "punpkhi\tp1.h, p0.b"),
    ("__ sve_compact(z16, __ S, z16, p1);", "compact\tz16.s, p1, z16.s"),
    ("__ sve_compact(z16, __ D, z16, p1);", "compact\tz16.d, p1, z16.d"),
    ("__ sve_ext(z17, z16, 63);", "ext\tz17.b, z17.b, z16.b, #63"),
    ("__ sve_fac(Assembler::GT, p1, __ H, p2, z4, z5);", "facgt\tp1.h, p2/z, z4.h, z5.h"),
    ("__ sve_fac(Assembler::GT, p1, __ S, p2, z4, z5);", "facgt\tp1.s, p2/z, z4.s, z5.s"),
    ("__ sve_fac(Assembler::GT, p1, __ D, p2, z4, z5);", "facgt\tp1.d, p2/z, z4.d, z5.d"),
    ("__ sve_fac(Assembler::GE, p1, __ H, p2, z4, z5);", "facge\tp1.h, p2/z, z4.h, z5.h"),
    ("__ sve_fac(Assembler::GE, p1, __ S, p2, z4, z5);", "facge\tp1.s, p2/z, z4.s, z5.s"),
    ("__ sve_fac(Assembler::GE, p1, __ D, p2, z4, z5);", "facge\tp1.d, p2/z, z4.d, z5.d"),
    // SVE2
    ("__ sve_histcnt(z16, __ S, p0, z16, z16);", "histcnt\tz16.s, p0/z, z16.s, z16.s"),
    ("__ sve_histcnt(z17, __ D, p0, z17, z17);", "histcnt\tz17.d, p0/z, z17.d, z17.d"),
];

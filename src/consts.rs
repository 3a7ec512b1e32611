//======================================================================
// src/consts.rs
// Protocol constants and seed tables.
//======================================================================
//! Protocol constants and the π-derived seed tables.
//!
//! `P` and `S` hold consecutive 64-bit groups of the hexadecimal expansion of
//! the fractional part of π: `P` takes the first 66 groups and `S[0]` through
//! `S[7]` continue from there, 256 groups each.
#![allow(clippy::unreadable_literal)]

/// Number of Feistel rounds.
pub const ROUNDS: usize = 64;

/// Number of subkeys: one per round plus two whitening words.
pub const SUBKEYS: usize = ROUNDS + 2;

/// Number of substitution tables.
pub const SBOX_COUNT: usize = 8;

/// Entries per substitution table.
pub const SBOX_ENTRIES: usize = 256;

/// Shortest accepted key, in bytes.
pub const MIN_KEY_BYTES: usize = 1;

/// Longest useful key, in bytes (66 subkeys × 8 bytes = 4224 bits).
pub const MAX_KEY_BYTES: usize = SUBKEYS * 8;

/// Block size in bytes (two 64-bit halves).
pub const BLOCK_BYTES: usize = 16;

/// Seed subkeys, XORed with the key before the schedule runs.
pub const P: [u64; SUBKEYS] = [
    0x243f6a8885a308d3, 0x13198a2e03707344, 0xa4093822299f31d0, 0x082efa98ec4e6c89,
    0x452821e638d01377, 0xbe5466cf34e90c6c, 0xc0ac29b7c97c50dd, 0x3f84d5b5b5470917,
    0x9216d5d98979fb1b, 0xd1310ba698dfb5ac, 0x2ffd72dbd01adfb7, 0xb8e1afed6a267e96,
    0xba7c9045f12c7f99, 0x24a19947b3916cf7, 0x0801f2e2858efc16, 0x636920d871574e69,
    0xa458fea3f4933d7e, 0x0d95748f728eb658, 0x718bcd5882154aee, 0x7b54a41dc25a59b5,
    0x9c30d5392af26013, 0xc5d1b023286085f0, 0xca417918b8db38ef, 0x8e79dcb0603a180e,
    0x6c9e0e8bb01e8a3e, 0xd71577c1bd314b27, 0x78af2fda55605c60, 0xe65525f3aa55ab94,
    0x5748986263e81440, 0x55ca396a2aab10b6, 0xb4cc5c341141e8ce, 0xa15486af7c72e993,
    0xb3ee1411636fbc2a, 0x2ba9c55d741831f6, 0xce5c3e169b87931e, 0xafd6ba336c24cf5c,
    0x7a32538128958677, 0x3b8f48986b4bb9af, 0xc4bfe81b66282193, 0x61d809ccfb21a991,
    0x487cac605dec8032, 0xef845d5de98575b1, 0xdc262302eb651b88, 0x23893e81d396acc5,
    0x0f6d6ff383f44239, 0x2e0b4482a4842004, 0x69c8f04a9e1f9b5e, 0x21c66842f6e96c9a,
    0x670c9c61abd388f0, 0x6a51a0d2d8542f68, 0x960fa728ab5133a3, 0x6eef0b6c137a3be4,
    0xba3bf0507efb2a98, 0xa1f1651d39af0176, 0x66ca593e82430e88, 0x8cee8619456f9fb4,
    0x7d84a5c33b8b5ebe, 0xe06f75d885c12073, 0x401a449f56c16aa6, 0x4ed3aa62363f7706,
    0x1bfedf72429b023d, 0x37d0d724d00a1248, 0xdb0fead349f1c09b, 0x075372c980991b7b,
    0x25d479d8f6e8def7, 0xe3fe501ab6794c3b,
];

/// Seed substitution tables, overwritten by the key schedule.
pub const S: [[u64; SBOX_ENTRIES]; SBOX_COUNT] = [
    [
        0x976ce0bd04c006ba, 0xc1a94fb6409f60c4, 0x5e5c9ec2196a2463, 0x68fb6faf3e6c53b5,
        0x1339b2eb3b52ec6f, 0x6dfc511f9b30952c, 0xcc814544af5ebd09, 0xbee3d004de334afd,
        0x660f2807192e4bb3, 0xc0cba85745c8740f, 0xd20b5f39b9d3fbdb, 0x5579c0bd1a60320a,
        0xd6a100c6402c7279, 0x679f25fefb1fa3cc, 0x8ea5e9f8db3222f8, 0x3c7516dffd616b15,
        0x2f501ec8ad0552ab, 0x323db5fafd238760, 0x53317b483e00df82, 0x9e5c57bbca6f8ca0,
        0x1a87562edf1769db, 0xd542a8f6287effc3, 0xac6732c68c4f5573, 0x695b27b0bbca58c8,
        0xe1ffa35db8f011a0, 0x10fa3d98fd2183b8, 0x4afcb56c2dd1d35b, 0x9a53e479b6f84565,
        0xd28e49bc4bfb9790, 0xe1ddf2daa4cb7e33, 0x62fb1341cee4c6e8, 0xef20cada36774c01,
        0xd07e9efe2bf11fb4, 0x95dbda4dae909198, 0xeaad8e716b93d5a0, 0xd08ed1d0afc725e0,
        0x8e3c5b2f8e7594b7, 0x8ff6e2fbf2122b64, 0x8888b812900df01c, 0x4fad5ea0688fc31c,
        0xd1cff191b3a8c1ad, 0x2f2f2218be0e1777, 0xea752dfe8b021fa1, 0xe5a0cc0fb56f74e8,
        0x18acf3d6ce89e299, 0xb4a84fe0fd13e0b7, 0x7cc43b81d2ada8d9, 0x165fa26680957705,
        0x93cc7314211a1477, 0xe6ad206577b5fa86, 0xc75442f5fb9d35cf, 0xebcdaf0c7b3e89a0,
        0xd6411bd3ae1e7e49, 0x00250e2d2071b35e, 0x226800bb57b8e0af, 0x2464369bf009b91e,
        0x5563911d59dfa6aa, 0x78c14389d95a537f, 0x207d5ba202e5b9c5, 0x832603766295cfa9,
        0x11c819684e734a41, 0xb3472dca7b14a94a, 0x1b5100529a532915, 0xd60f573fbc9bc6e4,
        0x2b60a47681e67400, 0x08ba6fb5571be91f, 0xf296ec6b2a0dd915, 0xb6636521e7b9f9b6,
        0xff34052ec5855664, 0x53b02d5da99f8fa1, 0x08ba47996e85076a, 0x4b7a70e9b5b32944,
        0xdb75092ec4192623, 0xad6ea6b049a7df7d, 0x9cee60b88fedb266, 0xecaa8c71699a17ff,
        0x5664526cc2b19ee1, 0x193602a575094c29, 0xa0591340e4183a3e, 0x3f54989a5b429d65,
        0x6b8fe4d699f73fd6, 0xa1d29c07efe830f5, 0x4d2d38e6f0255dc1, 0x4cdd20868470eb26,
        0x6382e9c6021ecc5e, 0x09686b3f3ebaefc9, 0x3c9718146b6a70a1, 0x687f358452a0e286,
        0xb79c5305aa500737, 0x3e07841c7fdeae5c, 0x8e7d44ec5716f2b8, 0xb03ada37f0500c0d,
        0xf01c1f040200b3ff, 0xae0cf51a3cb574b2, 0x25837a58dc0921bd, 0xd19113f97ca92ff6,
        0x9432477322f54701, 0x3ae5e58137c2dadc, 0xc8b576349af3dda7, 0xa94461460fd0030e,
        0xecc8c73ea4751e41, 0xe238cd993bea0e2f, 0x3280bba1183eb331, 0x4e548b384f6db908,
        0x6f420d03f60a04bf, 0x2cb8129024977c79, 0x5679b072bcaf89af, 0xde9a771fd9930810,
        0xb38bae12dccf3f2e, 0x5512721f2e6b7124, 0x501adde69f84cd87, 0x7a5847187408da17,
        0xbc9f9abce94b7d8c, 0xec7aec3adb851dfa, 0x63094366c464c3d2, 0xef1c18473215d908,
        0xdd433b3724c2ba16, 0x12a14d432a65c451, 0x50940002133ae4dd, 0x71dff89e10314e55,
        0x81ac77d65f11199b, 0x043556f1d7a3c76b, 0x3c11183b5924a509, 0xf28fe6ed97f1fbfa,
        0x9ebabf2c1e153c6e, 0x86e34570eae96fb1, 0x860e5e0a5a3e2ab3, 0x771fe71c4e3d06fa,
        0x2965dcb999e71d0f, 0x803e89d65266c825, 0x2e4cc9789c10b36a, 0xc6150eba94e2ea78,
        0xa5fc3c531e0a2df4, 0xf2f74ea7361d2b3d, 0x1939260f19c27960, 0x5223a708f71312b6,
        0xebadfe6eeac31f66, 0xe3bc4595a67bc883, 0xb17f37d1018cff28, 0xc332ddefbe6c5aa5,
        0x6558218568ab9802, 0xeecea50fdb2f953b, 0x2aef7dad5b6e2f84, 0x1521b62829076170,
        0xecdd4775619f1510, 0x13cca830eb61bd96, 0x0334fe1eaa0363cf, 0xb5735c904c70a239,
        0xd59e9e0bcbaade14, 0xeecc86bc60622ca7, 0x9cab5cabb2f3846e, 0x648b1eaf19bdf0ca,
        0xa02369b9655abb50, 0x40685a323c2ab4b3, 0x319ee9d5c021b8f7, 0x9b540b19875fa099,
        0x95f7997e623d7da8, 0xf837889a97e32d77, 0x11ed935f16681281, 0x0e358829c7e61fd6,
        0x96dedfa17858ba99, 0x57f584a51b227263, 0x9b83c3ff1ac24696, 0xcdb30aeb532e3054,
        0x8fd948e46dbc3128, 0x58ebf2ef34c6ffea, 0xfe28ed61ee7c3c73, 0x5d4a14d9e864b7e3,
        0x42105d14203e13e0, 0x45eee2b6a3aaabea, 0xdb6c4f15facb4fd0, 0xc742f442ef6abbb5,
        0x654f3b1d41cd2105, 0xd81e799e86854dc7, 0xe44b476a3d816250, 0xcf62a1f25b8d2646,
        0xfc8883a0c1c7b6a3, 0x7f1524c369cb7492, 0x47848a0b5692b285, 0x095bbf00ad19489d,
        0x1462b17423820e00, 0x58428d2a0c55f5ea, 0x1dadf43e233f7061, 0x3372f0928d937e41,
        0xd65fecf16c223bdb, 0x7cde3759cbee7460, 0x4085f2a7ce77326e, 0xa607808419f8509e,
        0xe8efd85561d99735, 0xa969a7aac50c06c2, 0x5a04abfc800bcadc, 0x9e447a2ec3453484,
        0xfdd567050e1e9ec9, 0xdb73dbd3105588cd, 0x675fda79e3674340, 0xc5c43465713e38d8,
        0x3d28f89ef16dff20, 0x153e21e78fb03d4a, 0xe6e39f2bdb83adf7, 0xe93d5a68948140f7,
        0xf64c261c94692934, 0x411520f77602d4f7, 0xbcf46b2ed4a20068, 0xd40824713320f46a,
        0x43b7d4b7500061af, 0x1e39f62e97244546, 0x14214f74bf8b8840, 0x4d95fc1d96b591af,
        0x70f4ddd366a02f45, 0xbfbc09ec03bd9785, 0x7fac6dd031cb8504, 0x96eb27b355fd3941,
        0xda2547e6abca0a9a, 0x28507825530429f4, 0x0a2c86dae9b66dfb, 0x68dc1462d7486900,
        0x680ec0a427a18dee, 0x4f3ffea2e887ad8c, 0xb58ce0067af4d6b6, 0xaace1e7cd3375fec,
        0xce78a399406b2a42, 0x20fe9e35d9f385b9, 0xee39d7ab3b124e8b, 0x1dc9faf74b6d1856,
        0x26a36631eae397b2, 0x3a6efa74dd5b4332, 0x6841e7f7ca7820fb, 0xfb0af54ed8feb397,
        0x454056acba489527, 0x55533a3a20838d87, 0xfe6ba9b7d096954b, 0x55a867bca1159a58,
        0xcca9296399e1db33, 0xa62a4a563f3125f9, 0x5ef47e1c9029317c, 0xfdf8e80204272f70,
        0x80bb155c05282ce3, 0x95c11548e4c66d22, 0x48c1133fc70f86dc, 0x07f9c9ee41041f0f,
        0x404779a45d886e17, 0x325f51ebd59bc0d1, 0xf2bcc18f41113564, 0x257b7834602a9c60,
        0xdff8e8a31f636c1b, 0x0e12b4c202e1329e, 0xaf664fd1cad18115, 0x6b2395e0333e92e1,
        0x3b240b62eebeb922, 0x85b2a20ee6ba0d99, 0xde720c8c2da2f728, 0xd012784595b794fd,
        0x647d0862e7ccf5f0, 0x5449a36f877d48fa, 0xc39dfd27f33e8d1e, 0x0a476341992eff74,
    ],
    [
        0x3a6f6eabf4f8fd37, 0xa812dc60a1ebddf8, 0x991be14cdb6e6b0d, 0xc67b55106d672c37,
        0x2765d43bdcd0e804, 0xf1290dc7cc00ffa3, 0xb5390f92690fed0b, 0x667b9ffbcedb7d9c,
        0xa091cf0bd9155ea3, 0xbb132f88515bad24, 0x7b9479bf763bd6eb, 0x37392eb3cc115979,
        0x8026e297f42e312d, 0x6842ada7c66a2b3b, 0x12754ccc782ef11c, 0x6a124237b79251e7,
        0x06a1bbe64bfb6350, 0x1a6b101811caedfa, 0x3d25bdd8e2e1c3c9, 0x444216590a121386,
        0xd90cec6ed5abea2a, 0x64af674eda86a85f, 0xbebfe98864e4c3fe, 0x9dbc8057f0f7c086,
        0x60787bf86003604d, 0xd1fd8346f6381fb0, 0x7745ae04d736fccc, 0x83426b33f01eab71,
        0xb08041873c005e5f, 0x77a057bebde8ae24, 0x55464299bf582e61, 0x4e58f48ff2ddfda2,
        0xf474ef388789bdc2, 0x5366f9c3c8b38e74, 0xb475f25546fcd9b9, 0x7aeb26618b1ddf84,
        0x846a0e79915f95e2, 0x466e598e20b45770, 0x8cd55591c902de4c, 0xb90bace1bb8205d0,
        0x11a862487574a99e, 0xb77f19b6e0a9dc09, 0x662d09a1c4324633, 0xe85a1f0209f0be8c,
        0x4a99a0251d6efe10, 0x1ab93d1d0ba5a4df, 0xa186f20f2868f169, 0xdcb7da83573906fe,
        0xa1e2ce9b4fcd7f52, 0x50115e01a70683fa, 0xa002b5c40de6d027, 0x9af88c27773f8641,
        0xc3604c0661a806b5, 0xf0177a28c0f586e0, 0x006058aa30dc7d62, 0x11e69ed72338ea63,
        0x53c2dd94c2c21634, 0xbbcbee5690bcb6de, 0xebfc7da1ce591d76, 0x6f05e4094b7c0188,
        0x39720a3d7c927c24, 0x86e3725f724d9db9, 0x1ac15bb4d39eb8fc, 0xed54557808fca5b5,
        0xd83d7cd34dad0fc4, 0x1e50ef5eb161e6f8, 0xa28514d96c51133c, 0x6fd5c7e756e14ec4,
        0x362abfceddc6c837, 0xd79a323492638212, 0x670efa8e406000e0, 0x3a39ce37d3faf5cf,
        0xabc277375ac52d1b, 0x5cb0679e4fa33742, 0xd382274099bc9bbe, 0xd5118e9dbf0f7315,
        0xd62d1c7ec700c47b, 0xb78c1b6b21a19045, 0xb26eb1be6a366eb4, 0x5748ab2fbc946e79,
        0xc6a376d26549c2c8, 0x530ff8ee468dde7d, 0xd5730a1d4cd04dc6, 0x2939bbdba9ba4650,
        0xac9526e8be5ee304, 0xa1fad5f06a2d519a, 0x63ef8ce29a86ee22, 0xc089c2b843242ef6,
        0xa51e03aa9cf2d0a4, 0x83c061ba9be96a4d, 0x8fe51550ba645bd6, 0x2826a2f9a73a3ae1,
        0x4ba99586ef5562e9, 0xc72fefd3f752f7da, 0x3f046f6977fa0a59, 0x80e4a91587b08601,
        0x9b09e6ad3b3ee593, 0xe990fd5a9e34d797, 0x2cf0b7d9022b8b51, 0x96d5ac3a017da67d,
        0xd1cf3ed67c7d2d28, 0x1f9f25cfadf2b89b, 0x5ad6b4725a88f54c, 0xe029ac71e019a5e6,
        0x47b0acfded93fa9b, 0xe8d3c48d283b57cc, 0xf8d5662979132e28, 0x785f0191ed756055,
        0xf7960e44e3d35e8c, 0x15056dd488f46dba, 0x03a161250564f0bd, 0xc3eb9e153c9057a2,
        0x97271aeca93a072a, 0x1b3f6d9b1e6321f5, 0xf59c66fb26dcf319, 0x7533d928b155fdf5,
        0x035634828aba3cbb, 0x28517711c20ad9f8, 0xabcc5167ccad925f, 0x4de817513830dc8e,
        0x379d58629320f991, 0xea7a90c2fb3e7bce, 0x5121ce64774fbe32, 0xa8b6e37ec3293d46,
        0x48de53696413e680, 0xa2ae0810dd6db224, 0x69852dfd09072166, 0xb39a460a6445c0dd,
        0x586cdecf1c20c8ae, 0x5bbef7dd1b588d40, 0xccd2017f6bb4e3bb, 0xdda26a7e3a59ff45,
        0x3e350a44bcb4cdd5, 0x72eacea8fa6484bb, 0x8d6612aebf3c6f47, 0xd29be463542f5d9e,
        0xaec2771bf64e6370, 0x740e0d8de75b1357, 0xf8721671af537d5d, 0x4040cb084eb4e2cc,
        0x34d2466a0115af84, 0xe1b0042895983a1d, 0x06b89fb4ce6ea048, 0x6f3f3b823520ab82,
        0x011a1d4b277227f8, 0x611560b1e7933fdc, 0xbb3a792b344525bd, 0xa08839e151ce794b,
        0x2f32c9b7a01fbac9, 0xe01cc87ebcc7d1f6, 0xcf0111c3a1e8aac7, 0x1a908749d44fbd9a,
        0xd0dadecbd50ada38, 0x0339c32ac6913667, 0x8df9317ce0b12b4f, 0xf79e59b743f5bb3a,
        0xf2d519ff27d9459c, 0xbf97222c15e6fc2a, 0x0f91fc719b941525, 0xfae59361ceb69ceb,
        0xc2a8645912baa8d1, 0xb6c1075ee3056a0c, 0x10d25065cb03a442, 0xe0ec6e0e1698db3b,
        0x4c98a0be3278e964, 0x9f1f9532e0d392df, 0xd3a0342b8971f21e, 0x1b0a74414ba3348c,
        0xc5be7120c37632d8, 0xdf359f8d9b992f2e, 0xe60b6f470fe3f11d, 0xe54cda541edad891,
        0xce6279cfcd3e7e6f, 0x1618b166fd2c1d05, 0x848fd2c5f6fb2299, 0xf523f357a6327623,
        0x93a8353156cccd02, 0xacf081625a75ebb5, 0x6e16369788d273cc, 0xde96629281b949d0,
        0x4c50901b71c65614, 0xe6c6c7bd327a140a, 0x45e1d006c3f27b9a, 0xc9aa53fd62a80f00,
        0xbb25bfe235bdd2f6, 0x71126905b2040222, 0xb6cbcf7ccd769c2b, 0x53113ec01640e3d3,
        0x38abbd602547adf0, 0xba38209cf746ce76, 0x77afa1c520756060, 0x85cbfe4e8ae88dd8,
        0x7aaaf9b04cf9aa7e, 0x1948c25c02fb8a8c, 0x01c36ae4d6ebe1f9, 0x90d4f869a65cdea0,
        0x3f09252dc208e69f, 0xb74e6132ce77e25b, 0x578fdfe33ac372e6, 0xb83acb022002397a,
        0x6ec6fb5bffcfd4dd, 0x4cbf5ed1f43fe582, 0x3ef4e8232d152af0, 0xe718c97059bd9820,
        0x1f4a9d62e7a529ba, 0x89e1248d3bf88656, 0xc5114d0ebc4cee16, 0x034d8a3920e47882,
        0xe9ae8fbde3abdc1f, 0x6da51e525db2bae1, 0x01f86e7a6d9c68a9, 0x2708fcd9293cbc0c,
        0xb03c86f8a8ad2c2f, 0x00424eebcacb452d, 0x89cc71fcd59c7f91, 0x7f0622bc6d8a08b1,
        0x834d21326884ca82, 0xe3aacbf37786f2fa, 0x2cab6e3dce535ad1, 0xf20ac607c6b8e14f,
        0x5eb4388e775014a6, 0x656665f7b64a43e4, 0xba383d01b2e41079, 0x8eb2986f909e0ca4,
        0x1f7b37772c126030, 0x85088718c4e7d1bd, 0x4065ffce8392fd8a, 0xaa36d12bb4c8c9d0,
        0x994fb0b714f96818, 0xf9a53998a0a178c6, 0x2684a81e8ae972f6, 0xb8425eb67a29d486,
        0x551bd719af32c189, 0xd5145505dc81d53e, 0x48424edab796ef46, 0xa0498f03667deede,
        0x03ac0ab3c497733d, 0x5316a89130a88fcc, 0x9604440aceeb893a, 0x7725b82b0e1ef69d,
        0x302a5c8ee7b84def, 0x5a31b096c9ebf88d, 0x512d788e7e4002ee, 0x87e02af6c358a1bb,
        0x02e8d7afdf9fb0e7, 0x790e942a3b3c1aba, 0xc6ffa7af9df796f9, 0x321bb9940174a8a8,
        0xed22162ccff1bb99, 0xdaa8d551a4d5e44b, 0xecdde3eca80dc509, 0x0393eef272523d31,
        0xd48e3a1c224eb65e, 0x6052c3a42109c32f, 0x052ee388ed9f7ea9, 0x91c62f9777b55ba0,
    ],
    [
        0x150cbca33aec6525, 0xdf31838343a9ce26, 0x9362ad8b0134140b, 0x8df5cf811e9ff559,
        0x167f05643812f4e0, 0x588a52b0cbb8e944, 0xef5b16a373c4eda1, 0x7dfcfeeaf54bcbbe,
        0x8773e3d2c531dcd0, 0x55c4672952774f3a, 0x57ca6bc0467d3a3b, 0x24778425b7991e9a,
        0xdd825c26e452c8ee, 0xfcacde1e84833af3, 0x61211d031732c131, 0xccadb247e606be8c,
        0x712b39f188b4ef39, 0x3a9fcdc5c5755169, 0x1ff6994f39829cb0, 0x110165733343cbeb,
        0x61d3d0b444f30aef, 0xa8ae73752a3a1c9d, 0xb4b70914d6ab250c, 0x853b7328495f948f,
        0xd2a4ed8e6cf751e4, 0xc320bb75d9caa0b3, 0x8ba562624e84b03f, 0xeea8076e74a07fe5,
        0x8039e00c36ffdaf8, 0x03731358b9e671b9, 0xdac4ce1cb25b10ed, 0x4dd3d5b1fcf2b480,
        0x4634f57925eac400, 0xa9ac55ea728932df, 0x06041d055d31f502, 0xc539c2e32b89d9db,
        0x5bcc0a98c05bfd6f, 0x1b2506222e21be0e, 0x60973b04ecd54a67, 0xb54fe638a6ed6615,
        0x981a910a5d92928d, 0xac6fc697e73c63ad, 0x456edf5f457a8145, 0x51875a64cd3099f1,
        0x69b5f18a8c73ee0b, 0x5e57368f6c79f4bb, 0x7a595926aab49ec6, 0x8ac8fcfb8016cbdb,
        0x8bbc1f476982c711, 0x85c7da7a58811477, 0xcd67fad1d764d9b4, 0xc81029505cd09da5,
        0x1bb1f14795167d80, 0x0367046daf1daca1, 0xa2247b2311301a54, 0x791d99c67a4fb7cf,
        0x277449a409e57492, 0x35c9a57e5e7f500a, 0xb9a62a8ad5242a6b, 0xa13378599cda3346,
        0x148740474328ba08, 0xeb81d51f3248896a, 0x8007d85d0f6e8dda, 0x8250bdafce2ee042,
        0x897ee0225f003612, 0x3ba18f9026314076, 0x7824035a3b57e2d5, 0x8e78aed1e90dc600,
        0x90c15ea624609519, 0xb72ec3f8663ddcef, 0xef574232194195b6, 0x20c9203ff993700e,
        0xc1a44a7cbaede941, 0xf98ad4c4f8f43f26, 0xf060dd080eb9df1d, 0x9b33618855eeb734,
        0x6c56d0d433a0d6e4, 0x182885b21dafb611, 0xf04d46f750cdcb91, 0x407b4733d7a2b343,
        0x0269ac52b520773c, 0x8c910b9f7680e5f6, 0xc79ad874fd97cfe6, 0xdeb78fb3279ee2a1,
        0x7428670533645aa5, 0x554438084f1fc8dc, 0x116cc402d4f14617, 0x6183cd9ee11d5b9e,
        0x195d2523ef2f8e07, 0xd836767c44811938, 0xad366c9fdab0065b, 0x2c5bd6f663f7d10e,
        0x79104bd1d7c3e497, 0x432dd056932f8f20, 0x878025a708e90347, 0xcdac2120753a3201,
        0x9c6be1fd03f7b32b, 0x0ab85150d75a8f1e, 0x8fbf70ece0c67df9, 0x71f250e41abb9bf0,
        0x3f17f108edbfdc76, 0x37dcd54a48cce570, 0x8011bb358bc70bfb, 0x8194f91bd0816b10,
        0x5b3fe6415c6c5d42, 0x39d03ad66881cc3b, 0x95ed2bba9b2df677, 0x7db8057e0e1a306a,
        0x9c73b22b0f6fae4c, 0x1477324e85041c8a, 0x31f1b31cb03f5338, 0x3a3e70f003bda3d7,
        0x21507c16990fc0dc, 0xec48eb1b6e5aa777, 0x9dc7e5750c9490fc, 0xe8b70bb69c2462de,
        0x58f9d6e286c90d9e, 0x393954bdb5f2a4fd, 0xa1cad7c66dedfc47, 0x4664d28514e21038,
        0xa34ae5a60cc88295, 0x26d74884885a7daa, 0xab0e25aae328dacf, 0x3d75ca5c9315b071,
        0xa8f86a7a869a2a3b, 0x73c244966e32834b, 0x247dee3ab3a3e118, 0x0e3e864b85639d62,
        0x88b3363fb3a767e5, 0x4b847b5e39540816, 0x7538de9741b0d6d8, 0xed77d7107636b96c,
        0xf57d4c5b2066ffb3, 0x17877f49ff0478d2, 0x759af12c0e64dcf8, 0x547b59f127bcec3d,
        0x18ce85b88418fe14, 0xf07cf6b4a5827ec1, 0xed2893de8a5fe68b, 0x4e112d7347572ccb,
        0xaf86678002e62d57, 0xe2994ed7b1c7eba4, 0x01aad3603470f655, 0x8f1bb1a1e9fc7e99,
        0x995672b0a2fa5702, 0x15b4de2a4f23088c, 0xf2f97ec938568716, 0x61a4ffccf419cf11,
        0xccfacbcebbca28e3, 0x784dd43e1150dee3, 0xbd060ba08223c3d9, 0x4bda38c78d9a7575,
        0x4c007ec0ab58efbb, 0x5cc287d0f064ea5c, 0x85c0368aaf2ad213, 0x0eaac3cdce740241,
        0xfb003622bfaa4abb, 0x583b589762a96a1a, 0xd06c7f57ff53f144, 0xdd67f044d1c28282,
        0x8bda0388548d04d4, 0x4e4dab2db00734ee, 0xd46e84086efce2bd, 0x39c9fb1b50898815,
        0xc67e79c49fdedf05, 0x10da0b2af8b32839, 0x06c91af07f24f3bc, 0xfb10760cb49f0850,
        0xd2cc97d8ec63395b, 0x9db31d42a7cec064, 0xfa0e398d479acab7, 0x07be150a28f3754d,
        0x728c72a3f53f82d5, 0xbdefd866bf22f70b, 0x655e9a03a6f11d63, 0x4a7132f693e833a5,
        0x5e9274b4015f4e35, 0x6a59dcdd9d1e85ef, 0x137d430aa6be0b0f, 0x12a13ea30191692d,
        0x91a1e7691cc2852d, 0xaee7300fdaf3860e, 0x408ac32a6a50c876, 0x996e523b8c04f81b,
        0x417f8595aa4cc582, 0xfcb3b8e23c2156fc, 0xcd71aecd32a95c70, 0x7924389bd1047541,
        0x9516c77f3df7f5a6, 0xb1384d6fcb22f10b, 0xbc73ca3b1ec4f4f4, 0xb9dee6fb93a467f7,
        0xd638221089a1405c, 0xfd2fb6a54bc618b6, 0x96f3bb267289fe18, 0xeb855796f09854d1,
        0xdc9e89fcaf106fdb, 0xf5a238571b1815ca, 0x0a6f7cb51513353f, 0x8ac43941d1600967,
        0xba7a830acd6ce82c, 0x29ab1461c4be5ecf, 0xbf756728ee1651d2, 0x8350fef2d9a56503,
        0x1160d3ccb0767848, 0x82fa32727dc7523b, 0x409d85e9f46167c9, 0xef335bfede10e539,
        0x360295cd5e0f347a, 0x9dc0da0142ac93fc, 0x32c3bec9171678b9, 0x4c78a82b7c2c748f,
        0x3828095e064d62c9, 0xf49cb2be9c9f0126, 0x321485cb4773e463, 0x0e24d3491b7d32e8,
        0x5d15ee76a962f764, 0xdeb15d4574db8d32, 0x099610f3b3bd25a7, 0x8a4a1e30e3a7f974,
        0x11b6004cda44bf5e, 0x9848711f5104ade1, 0x4a3b2ac8cf048420, 0x2f073250be5f1dcc,
        0x59f58b34f5410b4b, 0x172edc27c8b798c9, 0xe7fba7bee8131c63, 0x3da9d7944fa593b6,
        0x684a0c6bea248658, 0x6a33f10a3a76f7c9, 0x490bcc010090edac, 0x643fe36aa33a5490,
        0xa3d5f8b48cf3fce6, 0xf53ef83439dc6eed, 0xcb7a2ad77357022b, 0xbda4e4538db6c313,
        0x88df6453a5e9ea24, 0x5dc52d198abe6869, 0x6bdb8d96e21b92ab, 0x8c3db835ffcedfca,
        0xae947e3b49a2b4bd, 0x298ccc36a3d7193b, 0x922d5a7ed0c5161d, 0xe4cd940be06728c4,
        0xef5cb80d23e73708, 0x29c4fd6f93f61230, 0x4e30cf0507c74c09, 0xc04c1b3d943d5ec6,
        0x03e1291945fdd157, 0x11348fb5cb36dba1, 0xc4fe692324a33b0e, 0x499425f2fa87319c,
        0x587d2e1de3bf7a76, 0x3d1a1d39600d94e4, 0x88019070c7baedfd, 0x13733cc160299767,
    ],
    [
        0xe3ede1160bc75684, 0x44abbd60a47d8e20, 0xc589a0633522cb00, 0xe87815164ace93cc,
        0x6b9e5d20a12bfe3d, 0x11371eeb584a4436, 0xa6df8d4bb44831c6, 0x852c8c2a711eb439,
        0x6db68c03a9fb89f3, 0xfc170e64ea76b5b0, 0x8dbe0e5f805cad36, 0x7530ac9c6cf68e35,
        0x891a338814ed7939, 0xe8214b6bdb3206b1, 0xe4a66072c4497e62, 0xfc14bb667f4ec9a0,
        0x5648857d9958ef6c, 0xce2487ddb79e1fac, 0x49687ef7bfb13209, 0x72f4723cf6652529,
        0xd291228d7308942b, 0xf00de97de596928c, 0xf7017fc9a08bf910, 0x1ab9c11568f592be,
        0xb48a4ece91c1b9d0, 0x0bc340b19ed82b04, 0x435d352b0bd8fcef, 0x3544ffdbb90f5cee,
        0xacb9b26c18141308, 0xf0d3923e920d0c84, 0x67d95eee3d2892ee, 0xcbbf9791dac6abfa,
        0x2107ca17eeb2d41f, 0x0a15b8536117f7f8, 0xe38efd17847c5965, 0x299f455128902084,
        0xe3c19c842da0fc7f, 0x438542355030a02b, 0x09b20bfda067adc3, 0x207e8e2296b7b8c3,
        0xae2034d10df42664, 0x8aec66374c6a4caf, 0x021c5e382756df1f, 0xdab397892e258d3f,
        0xbbeb27f2593ca22c, 0x02f538557c761fbd, 0x5d1f93565bd28c1d, 0xf93ce73599b8aa44,
        0x118489ef0e0ed804, 0x26e9a60fc55ba1a7, 0x2d592a941ee1bbca, 0xf3e4ea86bb639898,
        0x8a2c6f5594d4ef71, 0xd3dd68b3e2e12b5d, 0xe3a3f757d7ee1599, 0xa4c0e18d9997f82d,
        0xbd32a8c683cb1b29, 0xa059953a4f92d812, 0xbb2289a9855d888c, 0x677d6ef341da321a,
        0x2b4ffc49b1821bd2, 0x0257e7e26f413397, 0xcb31728801cb390c, 0x3cb685b21cb3fba1,
        0x788db8a125d401bb, 0x63bffa8112f19d42, 0xa26082be05e4e1ac, 0x2fa9937f2125ab76,
        0xe5e315e2266c09bd, 0xdc5b8b66d671f135, 0x7f354193fabcb03a, 0x3c9d682d7f698313,
        0x8ba04039ff140fdc, 0x312a0a394e8c9048, 0x1a2290ecb9f91d01, 0x28cd49e7af451ec0,
        0x0f6adbde5fffc10a, 0xc53c8c75fa7dcf99, 0x01fc98ccb44ca6f3, 0x6bd7a58209c968c0,
        0xac23bcfd1a4fa2e1, 0x7fc86c6fb1b0e97c, 0x9ed901f601eaf9f0, 0x95f1081a1bebbf37,
        0xdb26cd0da39b1f05, 0x4c6e73df5fb3f0fa, 0x3eb86a198b26131c, 0xcac5592422935ebd,
        0x95eacd29bf617efa, 0x2f41a05effe82b79, 0xa86a40ef4867cae7, 0x9c39b9117a125986,
        0xe37d32ce39dbcb51, 0x3f68378eb6844a13, 0x7cc5a27ca798f90c, 0x0620a80357ec10a5,
        0xeb8432e5703111de, 0xe859f372be354560, 0x82656f21a2c57145, 0x14a9b7e1c553ea68,
        0xd2d5dd6f9307bb8a, 0x14b7194207b5105c, 0x8184d3c3a12ddc77, 0x519f29673d8158ce,
        0xb3c32ca30f77e983, 0x2128e5d7e296bbaa, 0xb3c36f108c02701b, 0x79799e52e875f1cf,
        0xfadffb023a68e76c, 0xb092a17c4f389380, 0x26649815211577da, 0x64df730e2b87a4fd,
        0x1a5e4f14169cfcf2, 0xe076a65f976e635c, 0xdcad57936e017e84, 0x2123f4adcfe3e761,
        0x7689ce9c7291b34a, 0x3128d6249bfef6af, 0xed98745fad9bcaa0, 0xe48850a31635fb8b,
        0x06fd57bd0d326219, 0x1746dfa4e85901e7, 0xae9d5a4533d88a6d, 0x21ea70902de52e47,
        0x711024d7735e27c4, 0x8348e17f014190e6, 0xf6df0d50c6700128, 0x5b70ecaba6a01c98,
        0x1114af3e1dd46fd6, 0x1e3c56823076fa3d, 0x642f2eb5a7c7c625, 0x75655a99c51920cd,
        0xefc5e07d1c996040, 0xe3048644ef5fc2ba, 0xf381235f5959d426, 0xb1485dbbf14bb82b,
        0x340ca2ab7e8c3151, 0x5901bb9dd8c93107, 0x1693701c2f0fd38a, 0x2265d674ecc395fb,
        0xf951cbe74cde4af9, 0x16de85e3e0cb3310, 0x8b16c0143a0106ff, 0xf125b5b3cb45f407,
        0x79e7389f5cd3a367, 0x5a80b1e4edb17199, 0x436ea05a3e377949, 0x3a3d4ecde00b34a0,
        0xffa49567f668fa93, 0x36bcae2201e1c17c, 0xeac3650f973ad8d5, 0x430dbb8d04f92104,
        0x5641edce3ac269fb, 0x786aff702a2cacb4, 0xf6228018eeb3e205, 0x5223b6b884da7b93,
        0xf69cb1725661ced8, 0x52d65674bb06447d, 0x10d976884a4d4e2e, 0x85562963afb8fd77,
        0x3eb067c62eccb316, 0xb715b82c4cd5704b, 0xfc48c9515a696aaa, 0x91ca3a2fc6c97b48,
        0x1e1227eeea5aae0f, 0x1fce1b1b0149c631, 0xfdd8afd9f6466639, 0x645338f3eb8392c8,
        0x3318915b53748398, 0xbb711937afab09e5, 0x5fc32ff1b3c1fe1d, 0xaca39dbe6f87b608,
        0xbed2b1b1c036c554, 0x22daaf24caf4f53d, 0xf854e55a212471d9, 0x7d2d07779b25563b,
        0x85ed851cdc95dbe4, 0x6ff966162c13e934, 0x0886ba4d85f776ec, 0x4fc3757ccc791c7d,
        0x67171d83fe93e855, 0x650428c5a5d69909, 0x1a4af2bc95b74227, 0x26ae05e937cc6e58,
        0xb6ebf6a679fc9dbc, 0x6a289f831db090a3, 0xfed906d8873153d8, 0x8d17068c2fcb255d,
        0x9ce6f36322e5f0e9, 0x99505ec4777d1d28, 0xcea31a15fc3f4432, 0x40ef079c4f26c32b,
        0xf9c2cb89f0b40e03, 0x4f10dbc4bc83de6d, 0xe34ae5cb8798ec34, 0x632d8651cc6caf6b,
        0xce4797bd98ca8826, 0xc28d82edc7bcd3b2, 0x2afb56ffb2280bf9, 0x0faa53ba70bb13f1,
        0xb88c9bee75f865db, 0x65b9747600c27a47, 0x7147367e52b391d3, 0x9a10c6322889967a,
        0xd667521fe7e68d9f, 0x41b14d505d608d8a, 0x2a8d5ee472197b7a, 0x9e0d40e0b7d84d86,
        0x8faef64a9f40b830, 0x085a45bf37c66777, 0xdd26fe46494978cd, 0xc336ac136d0ef2d0,
        0x93d63d524059298f, 0x758e39deb59fb07a, 0x9f5087d97a5abfa6, 0xea89450159e9b257,
        0x0b81091656cf23ac, 0x8bdd7c9476fa3428, 0x0cd33c02749d58a8, 0xc14d4dce4d984d74,
        0xbcea2df9ba5ee881, 0xfdfb1d43fa94d0ca, 0xec038fbe3f78e4bc, 0x0c83727c60a40c3b,
        0xb60283fd1a1f7df8, 0x83647ddf5a6ea43a, 0x45e2c5fa1164677d, 0x12c2242292d83289,
        0x67c64bb1516cf2fd, 0xddfc03fa52d573dd, 0xf2da185f6fcef553, 0x280c9fae8bebe1c3,
        0x5c4648c6ac8e2156, 0x39f3acddaaff23ec, 0x426570eeff59d494, 0x19c3be0bd6f859fb,
        0x23ce10871775da1a, 0xba648a66ccc808c4, 0x51be41ea51a28fd8, 0x34df5e938481f74f,
        0x6100816d3340a466, 0x70548249c75e5120, 0xba79702279a00748, 0x6f067133e39c6f68,
        0xd4a56f6de85bf670, 0x9bc03abaa6fc1a71, 0x7896217952937711, 0x04cf9fd6c613f747,
        0xadb4e5e44bd90f88, 0x994fd52df174d699, 0x30042813012c0114, 0xf26207d02a6e2994,
        0xd01ea8ca8b4289e4, 0x288b2e9fb77ec8c2, 0x062ab5ef441c44b9, 0x023017b24d33e3f7,
    ],
    [
        0xc9c549126b629fc5, 0x13d2028d708ffc38, 0x99bf4a68002fa9f9, 0x959b2bdbbf79c584,
        0x2a6ae3a9af0def7f, 0x3961dff94e0f2fc3, 0x375602f6cb38090e, 0xff27fa5fb4361dad,
        0x27f105c6ff7a86a7, 0x89c6a294797b99fd, 0x859c810d3e650654, 0xcd5faebdaa91e7a4,
        0x80b70152513a0e3b, 0xf3d5225d6212305a, 0x0b2e2d04d6e0a998, 0xbc00734cb44e2bc4,
        0xdf6923bf27418c14, 0x6b0d8e79bbc2202c, 0x4f5354eccf70bfbd, 0x3004547da9fc32f9,
        0x284a7e7f49ab8971, 0x7c4c5273348aeca7, 0x4af7b4566a7d274f, 0x41144e72c6576b5e,
        0x94de31e88fff2c89, 0xc4b22594d0138a97, 0x63efe7a453ea6ddf, 0xb611ecb4722fe373,
        0xf819c4b88fc3df60, 0x93e879d9871e50b2, 0x0ab6063ff823ab24, 0x1d753e36002fe0a2,
        0x59155829a234e540, 0x2a3a5ef606e16c73, 0x398eed502ba793df, 0xa2e4cd3d50e7c902,
        0x455226ee9cc01966, 0xe783c5faa4a03bb8, 0xe627076a6a926733, 0x7ecff39f7a1f3091,
        0x0cfb8fc622b3ed44, 0x3bf287327cc97704, 0x16588ebc87273bfd, 0x23ad2e3d79dc9fa4,
        0x6f33f954dc3ddfaa, 0x8855135e2935ef4e, 0x980a08e4cade1b0b, 0x0ae829c4b9832d25,
        0x7e26508cb0e1d951, 0x014e05a1efef032a, 0x7d73e257f4e46436, 0x3eddb5eabf92518c,
        0xbeb2e77de87fbea2, 0xe774b1c87370fa54, 0x8212c2d3fd68bcd3, 0x80fdfebf5965c349,
        0x36e0be298259b3c2, 0x7900b71c3bbde591, 0x4be48027cbabc230, 0x9ab8623d10f1ddb8,
        0x67353fe74b23e082, 0x14d19143cd01bbd9, 0x9b8f27fee6873317, 0xa90f9f28be002243,
        0x95e3326a1a5d0985, 0xe9cdfc8a83bb7d8b, 0xdd5bdcbfb6238048, 0xac5db086974c4a25,
        0x3138a84a6ee55df9, 0xb6aaff87d1aaab74, 0x7d882d01eac51639, 0xb1d786708070b049,
        0x2b2d6acbbe60ca03, 0x7e9fb44b03bb7cdd, 0xd46cd6e2b7355f16, 0x28189952e0f24ef1,
        0xab1bb900c9ed265c, 0xe2d04cf2396e9e95, 0xe90b7c2bc71edfbf, 0x2bfd0239bcaa1ae2,
        0xd5a67ac75d09e06c, 0x1042c9914bd7a768, 0xb95d116a50577df5, 0x4d5ba7fd9302a958,
        0x10efb35d7c44d04c, 0x2840cd3bbfe8a000, 0x6e1d0b91bf83166f, 0xc94beadce2a22661,
        0x29f3dec66d94a52b, 0x6de8d82598c80d5a, 0xdba35d1e9fc9976e, 0x70c6f78ccb1dc1ac,
        0x5f89d50a1a0f5014, 0x89ba6abe2675a341, 0x2e91ca2d639705c7, 0x0a1e10f5ecb1cdf8,
        0xc6f4d4c76ca28e32, 0x6c1f1960e1ffba3d, 0xfdaba7b749417ccb, 0x2ebe5734f41bb7b6,
        0xff1b3883f1c9ab13, 0xd2bb196566a38dfa, 0x7b512382658e0ea5, 0x935bb5d4a12a9bf7,
        0x960fbaa2555c0b70, 0x3e525a53aed652b2, 0xb392181888f09e91, 0xeb9c20c7852cb5b6,
        0xfe412d512e5fc6f7, 0xfce8c877aebf0456, 0x64e554384fae86d3, 0x3f7fcb2d2961457a,
        0xeaaa1911b7b127b4, 0xfc0705a22d459dc0, 0xe1bdfa1c0bfdee98, 0xf87b87a9f83c326a,
        0x5ef3fbcda686ccd5, 0x3a6062109261f2cb, 0x6de5adf39c432638, 0xd3e5b2421aa14df5,
        0xb8c3e2a48d04b5ab, 0x353ad3256b300551, 0x2c293e7b5cd65ed1, 0xd1424a125365a941,
        0x2d7dabf9a99a9ef0, 0xa22e73f4144c14b0, 0xb28d10b4daedeace, 0xed1c674802891af1,
        0x97086b1018a4cf83, 0xe2bfabed37127735, 0x02f6ea6ee53cee62, 0xabd1ee13e70fb008,
        0xc74ef42b9a66adc1, 0xb37d68bd31cf57ba, 0x50fe1d7e33412595, 0x5e1d0f55ff19fa60,
        0x60bc42ef8a205d65, 0xf6c988fe294d1666, 0x57fbd06f63eb46e3, 0x6ef46444a4cdbe82,
        0x8b5264728bd852f1, 0xbcae0db7dd7356f2, 0xa668bea6e240d70c, 0x3b57508cb52c4041,
        0x896e399798c84992, 0x55762ff107ed577e, 0x594a7e2fbcb2eb8f, 0x9aebc80f2b38f26a,
        0x43e6dd993fe053cb, 0xbd77a7e5122aeaad, 0xe7928b16d1212579, 0x095bd76f6e364ae7,
        0x45c5c8ec7b9a739e, 0x192b00027d4f1f15, 0xc7370445ff3569da, 0x4d89f2c82087874d,
        0x3001b7cab20dc804, 0x8e85ffcf7de4ab5d, 0x3ba794f55a19ade7, 0x1d485bebf50c76da,
        0xe937c2354a69ff66, 0x65b0fdc5e27f9505, 0xfdec5b5707a41cb5, 0x56226e58f0342f9d,
        0xe47b29225d24be40, 0x0708b0582da0d569, 0xcaeacafb626d88b6, 0xd9a23ddafc49de6c,
        0x0e54f8c288ae7a36, 0x5a16100cf86d7ca0, 0x1b400779b429dcff, 0xffdb45e8fe03b385,
        0x55883f5a18c4c190, 0x36080e4de983c048, 0xa7619e4d5d7023ba, 0xea1b4448fae19df1,
        0x920a7a62ff9be5da, 0x8d630c913a8457b3, 0xc1317aad19b125e4, 0x2ac60da85ef6a4fc,
        0x18453d57cbe16e34, 0x5b3e0dc184e910d3, 0x5989e958b02a738c, 0xa76a21342ae3153d,
        0x6c9a6da3a6b590c3, 0x9294f2b261ffd9fc, 0x5dc7abbc0a085e11, 0x718f3be6fd0598bf,
        0x8552331ca17183ec, 0xc702caa9151c171f, 0x02a6e9cd28fc2637, 0x1d79ce9fca06c85d,
        0xf990df8d4704243d, 0x4a5c1f56fe965b3c, 0x603347addc37a650, 0x1cae34eb5ebb9a97,
        0x137d411f4defe9fe, 0x8b1e6d8b9d92a7dd, 0x5888051bbd7de708, 0x2a05f513cd02f32d,
        0xf37a6090024df9aa, 0x3e9d2a7e829cfdf2, 0x61d25546792b1059, 0x1b042cabcc51561c,
        0xba6a92f3c9c23431, 0xdafa0c012658242f, 0x15388a8c97d1c6e1, 0x1d75a986270ae314,
        0x00ad6269f740daf5, 0xe11acd2629ed5c7d, 0x78b8e95513f8d4c2, 0x9b4216455eb07f9e,
        0xde96e41b398e740f, 0x47f4dbaa6af2216b, 0xe324e52ed534622f, 0xbfa0f89b7af36fa7,
        0xad459d4846671973, 0xbc8c0111a08779bf, 0xbf7e8f32f914239a, 0x7c039fa68dcbcc5c,
        0xb2c77934f9d19ee2, 0x2014eff97bf6f383, 0x18a1e15b762d0a76, 0xab97671844f7d0f7,
        0xd900ed19f558726f, 0xc40702befdf81427, 0x3c04ad1aa20e9fec, 0xa5994e7f4fae1300,
        0xc30d8c955dffc1e9, 0x28b67f51321d79a4, 0x80805cddcaac217a, 0xc450000e76a4c407,
        0xe6b11477fb29ba1f, 0xb6117b2edb67efdf, 0x90919cf5f2402660, 0x870990dee6953d45,
        0x59dca2bbe1d1efe0, 0x1afc02321cb98fbd, 0x4d64d3e14f230a06, 0x6711320ea8a9f71a,
        0xb30472183291ce32, 0x50e85b556358d19b, 0x75574349c061908a, 0xd7fd1aa7e4fc7a61,
        0xc01e9492fb30e932, 0x8ee6d89faa3d9a2e, 0xf8b5c1b7c0b0ba37, 0xd81fdfdd54eb3270,
        0x9cd27406eb1ff9f7, 0x338cae31f8b82e2f, 0x85fd727ab033fa40, 0xd701fbcbb7403203,
        0xde77dd60d4423ba3, 0x4c85c9518e850016, 0x7a70931fee8600a5, 0xadbba0197cd52986,
    ],
    [
        0x626263a3b381d4d1, 0x28913cd012da73da, 0x6b41dd34c1ada2fb, 0x8d97da19b167ed9b,
        0xb4812d4c5bb6cda7, 0x669c5eb0ab412ed2, 0xd3c0d38280bcade4, 0x961f99be007375c9,
        0xe1cd3f0d18427e6b, 0x2f8e1f31ad07916b, 0x0bcb45904214a966, 0x080dea4fe4402ab8,
        0x3164da2c4ec6d4b3, 0xec1ab3e0371aa403, 0x703cc4a2d61c9eaf, 0xdf938277b360cc64,
        0xa809622ed1ca223a, 0x0d0c41c61fc1cb73, 0x6b1d07d0f7631f64, 0xcd6c472b23716169,
        0x7c547d101de31920, 0xb8aa5d5d5a08b84d, 0x8783fa268475eec3, 0x4ad24805dea948d4,
        0xefd4680de1082145, 0x1f410a6f5cb25d7b, 0x5830bae8dfc1b3dd, 0xa52eeac39fa9e4e6,
        0xe780295aa1fda9cc, 0x05292076633bd6c1, 0x84f452863bccd3f0, 0x0c0ffa13a48ac0e7,
        0xc10b071d8f38b069, 0xfc797f140a0c843b, 0x55b2102f2b6f2cba, 0x6a65abf4bc13f3d5,
        0x7ab981e9ed36bc8a, 0x01590dede28853a9, 0x880a305a45927bb5, 0xad60bec2758c9434,
        0x4f5cc2d0842fffa1, 0xb56bc910589d9119, 0x29510482f6b85bcb, 0x191c5e8c0aac8f1d,
        0x53aee004b3a760b2, 0x6c47171ae122ee50, 0x8f882588c3af791d, 0x3ab1e787787f23a2,
        0x740a3d69f574f889, 0x563a7542ef0275a9, 0x1d4c7f0288b0f4bd, 0x0b6a095505c57b60,
        0xfcdc13ac38250cc2, 0x7c0f6dd8fee40397, 0x75d040bd4f8c08b0, 0xda40bcd1ab461ea7,
        0x0bb2664fb361b106, 0xff88c17c7ecbbdf3, 0xcb397f5a34bd8c06, 0x2c79097e71dc4099,
        0x0c7e28743703e385, 0x6b4e04ab3244d2e0, 0x7fb8c9f38282173f, 0x21afabc5ca89f8c3,
        0x3aa25bfae9e1b88b, 0x77e8c0b888b0b2ee, 0x8d7e99220b214d8b, 0xe4c85444b026a4f2,
        0xf29a85e1881a45a5, 0x73105cdebcf4939a, 0x6b923a2ffaa6d9cd, 0x44eb8bb4794d87df,
        0x0a60094b3cb6f83c, 0x03661679a1f217e8, 0x963c57f0455ba773, 0x48ed66f36494c7aa,
        0x0b20eafd85eb9191, 0x1c890980efa34c0d, 0xbda11e825b6095db, 0x3e193db7ce3e5f19,
        0xd52a1e3477b0cc82, 0x489db03838376cc8, 0x3cef20b0bc9f84e9, 0x70cb14480ec62200,
        0x246227a4a55ee063, 0x7af69eb03f5ea747, 0x39fa87659196b7f3, 0x81eceefe543bb263,
        0x041009d0cf373731, 0x62836b24eec15e94, 0xb498922dbab7e562, 0xb8a4fca94750926a,
        0x880c34678827f078, 0xd9adad0a8d1d0854, 0x6f3054702d3de155, 0xfff92a2da11fd9b0,
        0x6b012a4c96009615, 0x95bd42d4ca1ff867, 0xb1b1b706a1b652c4, 0x606c1c06836140cc,
        0x687393e9571f598b, 0x7fb3189d01008403, 0x196dc6e309dd3f96, 0x2ee2504e4fa033af,
        0x656edd9c1c2898da, 0x1cf705b8ebe7ed56, 0xa335f9de920e0456, 0x176e632d59157144,
        0x37b8036fbde47e04, 0x8db69c255b58351d, 0x75e3ad18fa15c435, 0xb88f8fa79e7acd2e,
        0xf4f1adb22c44430a, 0xa6f667b7787de551, 0x7f5a7205aab32994, 0x415894996ffdadd7,
        0x0066bb6cddc58d69, 0x73355dbcc89631cf, 0x4431fd499e8875db, 0x497d7f92a785c0a1,
        0x9e1259957cd82824, 0x06aa4f3fe70ca2a2, 0x2089374c701ad9e5, 0x9232a152f12fa6f5,
        0x8642d5b1e978751d, 0xb983d466746fc062, 0xb927b4cdd4a40163, 0xd318efa72d4e8e2c,
        0x0739c2b135066e85, 0x288d2f5ec554bb59, 0xe932090e1594b11d, 0x99aae93439757411,
        0xb6355ebe7352d0d5, 0xc55036d033d4ce1a, 0xcf62e455765770ed, 0xd35b32d0879cec65,
        0x4a7f75a91e55a387, 0xdba77cce6bba86c5, 0xa5bd40453312cc34, 0xc873cf4ad2b21bda,
        0xfb57acbbfff82a86, 0x548532941e5c97f5, 0xc66a0bf8e8a5eba2, 0x4263ce77f7eb6de5,
        0x2e8a6099fb9cb50c, 0x1d45ab6111b0dcb0, 0x7fe52ff300874786, 0x595b7d86ea04e95f,
        0x02670cba727270dc, 0xda2647dcac755bcc, 0x587200296a36c48a, 0xdcb2c01c8b852f55,
        0x9437511867eca888, 0xda15a6ebe12f1aca, 0x6bb01516c79ba56c, 0x59d5512650da85fe,
        0x2508641f00efb3d8, 0x1082864880f8737b, 0xb353426a76c9620f, 0x1133cd70565b0c38,
        0x4757f74c3ae9a9c7, 0x3c3158e934173fd8, 0x932eab7ff21856f6, 0xee6e48fa9c5d22bb,
        0xf0d5647da187773a, 0x12d8f8d9175d50b5, 0xcc1d89f26ca5f76b, 0xad350118288382ef,
        0x2e8209a98951707a, 0x429ac0e06e896040, 0x1fa39eab38c766f8, 0x0db3875c9089c512,
        0xd833c218b2296004, 0x51d022375837cda6, 0xb197efd3310610ec, 0x96d9426a03dd99f1,
        0xa668a96a49bd5595, 0x88b9c5a482def3cf, 0xce29aa1123ce0cce, 0xe8c5d1bedfeb8f4c,
        0x9fd5c941fa43f815, 0x71403b035037f8d6, 0xf96985771b6caef5, 0xb0ceaef1407fa726,
        0xdae80323bc5687ee, 0xe766d91350438ab1, 0x83352d6317d820d4, 0x471faf84d19b9d6b,
        0xb68b6f05c551787a, 0x0d82cb9a2fd0ed0a, 0x9c9fa69b835533cf, 0x529708c8b631a586,
        0xae6e7d9a9a021c8d, 0x3776e16d46423abd, 0xe26768f256fa285a, 0xd1064d1d8071ec0b,
        0x87dd00ca296ec314, 0x55664baa77126b71, 0x84923cea48b80a5d, 0xceef0fb7cdbe63e8,
        0xee9cd1f8f1ba69d1, 0x630cb18dcef9f6d6, 0x9acccfec1e5c0b8b, 0xa7c603d6c1771990,
        0x8d8cfca125f0fc18, 0x21b4040b45983a58, 0x779277d37f6f40b7, 0xe00e05c70d0dd723,
        0x2e06042a483503d1, 0x11e6c7594e2d37bc, 0xb05774bb3125d878, 0xf2f37b26d9686660,
        0xec467268c4b86304, 0xbcb60695b6c2fe57, 0xbd0f1f36040be959, 0x3717e742e40c6acb,
        0x3cc4804c944f7a20, 0x460408e2e1b06095, 0xa670d0945be59f3a, 0x302057b36fff72b1,
        0xda167250dcc3541c, 0x05640270451078b4, 0xb76aa32013fc0d9a, 0x46aeeecd80943d79,
        0x40ecdf130731b4a1, 0x97ad3d679928a042, 0x504f5c189fa51c84, 0x4e87afd137482693,
        0xa2badfb0fafea200, 0x1f87ea7ec1ec7232, 0x5ae7467498550a62, 0x46078eaf639d8b94,
        0xfcd6039345449dc5, 0xf1d0921e12bbf3e1, 0xa8278d27bf1494d9, 0x3aab6e1fdaa2078c,
        0xa7056d8748fe8393, 0xede587f7aa7f0d10, 0x7cc2f685085f2b73, 0xab013aa88cd2f44f,
        0xe728ee7494db1a90, 0x91e7ad1c7a9dc3a0, 0x0b50f837ccca0ab9, 0x6f4faf4b3591c776,
        0x8ecef7bb5eb62f62, 0x38b856766c7e761f, 0xa804c793b28b69d6, 0xe1ed19f49068cdb7,
        0x49104b4c4dd93914, 0xd5eab4e714dbdcce, 0xc5cc85b5c060507f, 0xdb32425c0d97e0aa,
        0x40982c04911c28c2, 0x2cc09e5bbeb228eb, 0x12d0ee550ae54c7f, 0xcda4dbe4290e1192,
    ],
    [
        0xc8e7ee2a6d35a85d, 0xe65c4ba2bdb172a3, 0x24e778560394ea96, 0xc2b27a43e3b8de3a,
        0x68851ca62a4e9602, 0x5c55530fe3b65709, 0x879085274307a299, 0x55ef07a5128d13e4,
        0x9d725027dbfce0d1, 0x1f0a36b7042a8604, 0xc0b998cfe7483209, 0x68c3492a53196622,
        0x74ab18a58026e986, 0xb2a80581c9bb8e61, 0xf6bea5d51868b77e, 0xfb9eef919206448b,
        0xd994be0a28ab72b3, 0x9e4f201f17e3a924, 0xe417494c2b40948b, 0xf181f1ad48176ec8,
        0x4e6dface8a54167e, 0x03eae7ebccd76504, 0xadb580cf9aefd7ec, 0xc95f10516fc1822c,
        0x16b4dbca7e2af7b6, 0x4c2c1e92a3fd8b1e, 0x2c47e98af402db8f, 0x41b35ecc6648a3f4,
        0x3e6304dbbab7d72f, 0x7fc1aaeaf908800e, 0x221d7a4945772d5b, 0x2c2e0622fc7d0eba,
        0x9642246b05b23630, 0x0a7b0f45486b606d, 0x13177f6fce892312, 0xd1cb0f1f6dfcc606,
        0xaa78e533377b4884, 0xd6b52f4a8c9e2a60, 0x99b73fd0ace073ac, 0x6c15a0193ab9c716,
        0xdfc2b9dab731f594, 0x346570bdbeeef775, 0x72c4aa3d7f315855, 0x33a724c96d575675,
        0x048d4945b24864eb, 0x4a133231d8592cc0, 0xd5c73db05e524096, 0x37ff9f3c0083ddb2,
        0x62cf329fb4ca2c7a, 0xfa32eb7340c80018, 0x44a0bebcc3ff0af4, 0xe69fda32090494f2,
        0x5bc6b8759cd4735c, 0xebd794c34f999ac3, 0x15ec4ab381966658, 0x04227560aad6e119,
        0x666f53b1c2d0e5cf, 0xfda528678c635d9a, 0xa95e2b06af981f38, 0xac8d213baf14763e,
        0x618980c706184fd8, 0x065fb48bfbed58f2, 0x3530bf7072f45b25, 0x63496cf13da894a7,
        0x10b0aab9b53d00d5, 0xc94d06690a504e9f, 0xb0188f98a1416c8f, 0xd6176a0189db2b89,
        0xd6c5973072b0d296, 0x41c5af732550ca99, 0x1f14a4cd472685d4, 0x7ff0eb3059940a8f,
        0x6ad4bb06b2cfc19a, 0x26caaff27d31965b, 0x24bac753ca8c7495, 0x0bd00e001ad03531,
        0xc85a61f41b4f63bf, 0xc069e56ea641fc8b, 0x58f03b9f82249453, 0x3845c8e628849c2c,
        0x35a07eaa2b311d24, 0xbd87a6caa8808ee4, 0x6132969af471feee, 0xad3ca83effc050f2,
        0x92f28fadfe9548ee, 0x4a445e95e2b96a7f, 0x0cd740d338ac4e9e, 0x22cbdba02cacee06,
        0x2ef0b47ed4a26551, 0x95162dfe6f77218e, 0x949bbe6e2c5e18cb, 0xd858457ae86aeb8f,
        0x70160c4c32fcc035, 0xda1b117538022cc1, 0x4155b446242e9516, 0x0ebb3a91c05f6dc1,
        0x72ce4a139155f85e, 0x968d1d2be2202daa, 0x0dd112e69a43590b, 0x54571d7106aa1177,
        0x8185cf7c873a83d2, 0xb70e081435fc7665, 0x1119443e61477bcd, 0xbe341a447fbf3154,
        0x207bb1320c48c47f, 0x4abda6de378e0293, 0x6107cef20273ce94, 0xdb975b82de2e74b7,
        0xb5c328a45210420a, 0xfd5db064ff0ce588, 0xa13d030fea1451f2, 0x43b7383d053e52ae,
        0x0e8ef259eb10920a, 0xad3ad1e9745478b4, 0x6205b40c776a6af2, 0x555382797179a5a3,
        0x2efe1524efcc58f9, 0x7cf888c7bc0799f2, 0xcda43ba405ddbb75, 0xb5477636677732f6,
        0x01319ec2188d7305, 0xc304c3c9c905ce9c, 0xf1fe7a84086d9818, 0x33ffc90248afefec,
        0x5f936e7e0b73f2a5, 0x997533fe57d3d2bc, 0xa8727c21d3025478, 0xb9a5ecb6d2b53213,
        0xa719ec619141cf64, 0x575191e04e65313a, 0xe939e987fcc67dc8, 0xe311dc20b4bf98ca,
        0x83b18f3fe3c6b19a, 0x45a3f7dbe43309f2, 0x29c88527bb7e1798, 0x9bd9065395ed5092,
        0x3afa47133cb87f2f, 0x79d33156f2a0aeb5, 0x4e391928829ed724, 0x45976e853a57156c,
        0x274ecb26774225dc, 0xf01d518d64d90a76, 0xb7aa9cd93bdf7dfc, 0x675187c1dde860d2,
        0x5b27441797399aa3, 0x34a484ae25a7d8cc, 0x3413743eea047c38, 0x6642f851a39f0fe0,
        0x7e784f26458566b6, 0x1667eb5a365039b7, 0x320cd5c287747c42, 0xc500626988237c54,
        0x1900cd551bea8f06, 0x1cb2eb6d1009c5f8, 0xfe4467ce9de6b84c, 0x474907e7e930d4de,
        0x9a03748021094135, 0x1d01a2cd1671e5e7, 0xea36e4d4baee3186, 0xfdc80a189b81415b,
        0xf05e5c2cead51307, 0xb10bf4ab1bf091dd, 0x9a360064e7eff780, 0x002d8fd679033659,
        0x2cb6755a67b7f1a9, 0x74289c32dac31036, 0x8b43c5f7e46d7626, 0xa5824ff7a1c04253,
        0xbe299b6e486689d6, 0xa6a36640b0e7ed10, 0xefce1b3b69319579, 0xa4c7511eef2e25d6,
        0xe734535a0a39e4d7, 0x0d4058b97cba88ff, 0x3fa7b14b24cdc6cd, 0x97b32577f69ee7d2,
        0xf456eade82a767fb, 0x0010ae7a6c3454d4, 0x35a647cf2cfe414f, 0x5f939de1e6b3a564,
        0x761cd4b5f4b8f9de, 0x32701d9f38859564, 0x927008126bc94ed2, 0x04ca39a82d3ee4a0,
        0x26ff262be4c1cd83, 0xd8171edc5eaf11b2, 0xe67378c44fb8dbbe, 0x43821b229ed5b95c,
        0xf7049aac3635cbe4, 0x1c4dddb37b9afd05, 0xf0cbf5b4691cd3d3, 0x6976c062ed0ffe99,
        0xd936db478e654d9b, 0x22f34dbe8b13f2e7, 0xccb7dc2de2731b06, 0x85f8bd4fcbdf97fa,
        0x02fab7045b1d055f, 0x97a94e31db778b87, 0x2882df5fc805577d, 0xb695d74f9a30de4a,
        0x0cf049c0a7345fa5, 0x96b9509f55f63483, 0x3084d0afbe224aad, 0x84ca453bc82105e9,
        0x9b4d589d4a02fecf, 0x3136fbba8192321a, 0xbd97d146df9f4e2b, 0xb9f8040962d96da0,
        0xedcf51d37d9621f7, 0x8deca39042a16efd, 0x9441f853c1504b57, 0x9d1024fd82563051,
        0xd34746588b2ce81a, 0x6bea6d58df62c819, 0x31029351d2e7904e, 0xddb03a88345fcbdb,
        0xe62307db8badd207, 0x32e5bb8925d326f4, 0x290ddc6cf8b1c598, 0x0b7248827f06a000,
        0x7679ee16865e48eb, 0x1f3bab764d8fe8cf, 0x3cb0e848f54b3538, 0x956d9c6eecec3965,
        0x73ec71ce0828103a, 0x86fbee17d8845add, 0xe60d3aff0f007cbe, 0x89d3033a550f2a11,
        0x2e081952f84293a0, 0x974f0f245bd0a5e7, 0xfe79914859c60354, 0x8982aceafd60f579,
        0xe1233f40905919be, 0xfab1dff38f021851, 0xc430d68affb03aa2, 0x2bb72e416faa9d5e,
        0xad3a44fe8079644a, 0x2e9561fb8b801944, 0x3300a1e2c054ccf4, 0xd8084d497fff7a10,
        0xc33e8b2b8828e728, 0xd1b3deb329dd52c0, 0x31b88b43f606c5fe, 0xb4212e76e6dc6095,
        0x93324e6411a911aa, 0x5138bea109debccc, 0x5bba38f1987eecb8, 0xa2fcfca27891efb8,
        0xfb0c2ef581179636, 0x0625a4ae64b186c9, 0xf3cf2fcbc3c58c0f, 0xf5ea740f98982795,
        0x2564a9c150ffba8c, 0xe62645e8043d11bf, 0xbf3fccc3619b3c35, 0x73d10f6b60d11815,
    ],
    [
        0xa8e12082d7624114, 0x9245f1a7a0997271, 0xad40a4311d954016, 0xc18b37d3ffbea3ca,
        0x9f75cb789bdcc8d1, 0x543457a71981f784, 0x7940b92e57823865, 0xee91834176d1a1cf,
        0x265ff2a579d6faed, 0xb66bf86cb191e358, 0xb0e5c8a0964f04ae, 0x407d0dc8595d3934,
        0x5dff91e9d6352ec1, 0xb9d495dd6fe7ebd8, 0x815bcf0edfedb01f, 0xc02bf2bb2a2a6fa7,
        0xcd2f1cea53958f27, 0x0683592403762063, 0x0f26652b5091303b, 0xe43ffb8885812210,
        0x3205ada9f0d3640a, 0x22807158d37a7403, 0x8b17a7aaa8121956, 0xe5b239c95ae32ef1,
        0xa14b442a7ef8c780, 0xe1449ca4f16add48, 0xe6079b9d7714a475, 0x9a9f36adb5fce01c,
        0x053444fdef512622, 0x9e1c5a27a97414f3, 0x97158027964bba33, 0x3577193e76f39380,
        0x503c38d0899ee5a7, 0x56f8a8386d84d297, 0x46301a01246c0f8a, 0x5340554dd1c86b9a,
        0x5c02e7a5a846aead, 0x94af414d20ffe6ce, 0x7ab72f4275b1701d, 0x37800aa8b54e391c,
        0x796ec8a820644cdb, 0x3257b2c90337228a, 0x36fa9ceee74e624b, 0x8715d5b910d11736,
        0xf450dfb3840b3808, 0x877336d0a96226c1, 0xf1b1d7eaf1ef9164, 0xa234abeb1cc6d6f5,
        0x5c9378781b51529b, 0x851e350d710845c6, 0x5dd5164748fed079, 0x9327398d83d5cd98,
        0xb3721c8d87bda627, 0x21f6d79fc003d794, 0x3375b31563ab92b8, 0x83bc7e579d936ecc,
        0x3da3d1eb726e0f38, 0x21aeda1e95bda637, 0x877efa5529b29937, 0x432303f07d4dd09e,
        0xf4970d01770ad733, 0xd9a755dad173e41f, 0xc8ce6c2632b896e0, 0x9c20f5d8623e9196,
        0x5b90dcc953048d23, 0xaf339f2a14763fd0, 0x4bb23c18895cd2ba, 0x8f9f3e95f22cea61,
        0x374b5a39db49bb9d, 0xe8d0649554dd3240, 0x3686f79bd4aa41f0, 0x92345e7b3f4b9805,
        0xb9210c91b1b72896, 0x909b40770a717bd4, 0x7165196685c3ba29, 0x819e949dc1f68ff5,
        0x35981a79bdc9b23d, 0xa8aba317d6362f42, 0x4395e8d918c5d29e, 0x24a9af953ed557dc,
        0x1e8b609f9289cf48, 0xcf94872a5e21cc20, 0x88f2a9dfff3d5b30, 0xf82694a79a525209,
        0xa6730ad7996cb74d, 0x5960ca440f7b3d2d, 0x10272fcb8474d797, 0x11b5c7975713e5c5,
        0x881d6984156e7f67, 0x4265e61a40384b34, 0x658f30b6f57afe38, 0x2d30cec9b7d2141f,
        0xb4de84c92f235b18, 0xf6c84891bbd361b1, 0x09ac2b3f99a4df60, 0x139d9360fee621fa,
        0x35e1abefd867644f, 0x95d6fe63e2c3ed5b, 0x4127228476dad854, 0x9a030f1d35d0610a,
        0xef67fca008316188, 0x1ae36d97427bfc2b, 0xaa0a541207ebcdd1, 0xf21a86a982ba0a5b,
        0xa158626cc13da4f2, 0x8454855f71f362b5, 0xa4a02da6cd956970, 0x3a1933a20a413562,
        0x7fb08fd190c1760d, 0x95c9d6d8f0a5597f, 0x905f7a12f8b9f05f, 0x14f063982721d6c8,
        0xe1c81055e9f345e4, 0x8b02b1f9a7b91569, 0x907307319bb4d3a2, 0x22fc429a762e202b,
        0x4c8298d584c50557, 0x4ee680f9d55e8e1c, 0xa59aadb37a64d4ab, 0x777aef54255c6baf,
        0xb9e9cd12c9f6d03f, 0x0486405d89e12012, 0xa8f32195ad9b848a, 0x24536a63053f1662,
        0xb8abdf34b4352046, 0x008e066ddf7b1bf0, 0x0937fa7d9d183d1a, 0x1a5396ef432972af,
        0xb07471dd5ea1912a, 0xfa5dfda5db809f3b, 0x151e0e66b664d54f, 0x1bbc2143b288b9ab,
        0xabc02f7631cc1927, 0xf9a4ae96f9834db0, 0xf8193501a12927ba, 0x650fcd815770113e,
        0xe0ce618e5b52da6d, 0xb5b152be30a8b07c, 0xdad7f353972ecc52, 0x99d4aebc060a6a0f,
        0x08e62828868bb696, 0x5167f893396d2f36, 0x1f2e9e73c80e8f85, 0xe0ab823094e08ab3,
        0xdc0beabaacc05edd, 0xb6753a97da5a8058, 0xcfdb118a67d4916f, 0x51d9c89214f493f4,
        0xc26167305289b384, 0x97160ab71a7e4cef, 0x973179255169012b, 0x7771f3ef6e0c219e,
        0x5e09d8bbe3a6ae29, 0xa711508cec25dd3e, 0x04279e53eff42d64, 0x9b8a1b3518bb56e9,
        0x221111f31d86b8d4, 0xe97d5ee7abde1fb8, 0xbc734f44df744fac, 0xdfc032c98833da84,
        0xf7a162f11b585ecc, 0xa6d1166246ce8eea, 0x0c6bd217156f8815, 0x439d1f080ba22869,
        0x652e7c122e040c21, 0x1747e6d3b2983347, 0x16b5b9143bdb4f64, 0x0e17a5c775c2ee40,
        0x53f23fad5ac19c45, 0x937348e6deca163c, 0x26d8f5211d908278, 0x2ca9d3196906ebaa,
        0x64d9c221b876dbe8, 0xf5bd98b39765093a, 0xf2efcbb39ac97411, 0xa01c2699cada8bbf,
        0x6abc75f617dbec7c, 0x23a862f326261e25, 0x7def17b30e43cbf9, 0xe454cb7ec51a1d90,
        0x8d441891aba6bebe, 0x2f2da70dcc76ef77, 0x439676424fa5a358, 0x49bbdcee76067631,
        0xf63a6bd29775d777, 0x5dfddb9b12e8fca9, 0x09a674e06451281a, 0xe418486e062ac31d,
        0x3b180bbe4a1e515a, 0xd0cb5c961b63e731, 0x9e8149929ad99c72, 0xec51e0a5193ca3eb,
        0xfa21ce56a89d7e17, 0xb08547231034f2eb, 0xb0eefd1e2bc1fbaa, 0x0a8ad2d2753f3f42,
        0xe283befa009ff8ec, 0xe1d4fc1ff2132d83, 0x9dae527a8de56ff6, 0x336f47d657e3efb0,
        0x660aaec7b4da8111, 0xa6dcb70f391303ab, 0xf85a3d5bf5d59398, 0x900e22f664d6875e,
        0xfa4c029f198dbaad, 0x4d773f305c40752e, 0xec2386abd852d287, 0x7b1a582851235aef,
        0x207ff1ea50d9d7e1, 0xe969be8b38c1865c, 0x99fa2391fd43f7b7, 0x910ef30f8f61dace,
        0x7e313eafa58d460e, 0xcf3ac88d24e28a32, 0x61b92c3c1990400c, 0x940ce033c5f94165,
        0xd035e3678ad93195, 0x35cf0c9ba37347e2, 0x7798c3c39edf6978, 0x7fbfd530b558d69b,
        0xa6cf9ea4c6fe06a8, 0x56e996f2c3c1629f, 0x0e1dc63b951c705c, 0xcc124fbcd97d41dc,
        0x400342714acdd337, 0x1365793b1b5e6497, 0x869266f1299c7352, 0xd74cea89e67b7194,
        0xc47e30ee84ef357f, 0x0db3483c5653cd54, 0x8c9a962eb061cfe0, 0xbb242f2b4b07d64a,
        0x25814925b674ffad, 0x2adfeb635dd35cc9, 0xaf510e642c60da37, 0x169475c9f7dc6f53,
        0xd4d552f641a01782, 0xe9faeaec2efe94ce, 0x4936fa1bbbd9097e, 0x7b8a614e856107ab,
        0xd21a345a686a03b4, 0x50c20ac660123213, 0x6997afa323e3573d, 0x430c76e287c5d8f5,
        0x4bfe61429794d597, 0xeda7f3f70ff8f1a1, 0x0a137900e0f0f7e7, 0x9c376d1e98b7be7c,
        0x10f892df487c4c27, 0x812ab00ab6486d79, 0x24c3c23fa0cb549b, 0x5f20aac86bb637d8,
        0xbf2fad7cda8f11b8, 0x9b14b76d08ef72be, 0x8a0e0eed190ebeba, 0x8cf97f6ece339c68,
    ],
];

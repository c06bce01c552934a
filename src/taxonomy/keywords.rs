//! Static keyword data for the trait and emotion taxonomy
//!
//! Keyword lists are bilingual (English + Simplified Chinese). Latin keywords
//! are lowercase to match tokenizer output; Chinese keywords are multi-character
//! words so they can survive the tokenizer's single-character filter.

use super::Category;
use super::GroupKind;
use super::TraitGroup;

// ---------------------------------------------------------------------------
// Big Five (unipolar, 5 categories)
// ---------------------------------------------------------------------------

const BIG_FIVE: &[Category] = &[
    Category {
        id: "openness",
        display_name: "Openness",
        keywords: &[
            "curious", "imagine", "creative", "novel", "art", "explore",
            "abstract", "philosophy", "idea", "wonder", "aesthetic", "poetry",
            "dream", "invent", "原理", "好奇", "想象", "创意", "探索", "艺术",
            "哲学", "新颖", "灵感", "审美", "诗歌", "梦想",
        ],
    },
    Category {
        id: "conscientiousness",
        display_name: "Conscientiousness",
        keywords: &[
            "plan", "organize", "schedule", "deadline", "checklist", "detail",
            "discipline", "finish", "goal", "thorough", "careful", "routine",
            "task", "complete", "计划", "安排", "整理", "目标", "细节", "自律",
            "按时", "清单", "认真", "严谨", "完成", "任务",
        ],
    },
    Category {
        id: "extraversion",
        display_name: "Extraversion",
        keywords: &[
            "party", "friends", "social", "talk", "share", "team", "meet",
            "chat", "group", "energetic", "outgoing", "fun", "朋友", "聚会",
            "社交", "分享", "团队", "聊天", "热闹", "活力", "外向", "一起",
        ],
    },
    Category {
        id: "agreeableness",
        display_name: "Agreeableness",
        keywords: &[
            "thanks", "kind", "support", "empathy", "cooperate", "forgive",
            "gentle", "warm", "trust", "polite", "谢谢", "善良", "体谅",
            "合作", "包容", "感恩", "温柔", "温暖", "信任", "礼貌",
        ],
    },
    Category {
        id: "neuroticism",
        display_name: "Neuroticism",
        keywords: &[
            "worry", "anxious", "stress", "afraid", "nervous", "overwhelmed",
            "panic", "upset", "insecure", "fear", "焦虑", "担心", "压力",
            "害怕", "紧张", "崩溃", "烦躁", "不安", "恐惧", "难受",
        ],
    },
];

// ---------------------------------------------------------------------------
// MBTI (four bipolar pairs)
// ---------------------------------------------------------------------------

const MBTI_EI: &[Category] = &[
    Category {
        id: "E",
        display_name: "Extraversion (E)",
        keywords: &[
            "social", "talk", "share", "party", "outgoing", "discuss",
            "people", "together", "energy", "社交", "分享", "讨论", "热闹",
            "聚会", "大家", "一起", "表达",
        ],
    },
    Category {
        id: "I",
        display_name: "Introversion (I)",
        keywords: &[
            "alone", "quiet", "reflect", "solitude", "inner", "private",
            "深度", "独处", "安静", "思考", "内心", "独自", "安宁", "沉淀",
        ],
    },
];

const MBTI_SN: &[Category] = &[
    Category {
        id: "S",
        display_name: "Sensing (S)",
        keywords: &[
            "fact", "detail", "practical", "concrete", "specific",
            "experience", "present", "real", "step", "事实", "细节", "实际",
            "具体", "经验", "现实", "实用", "步骤",
        ],
    },
    Category {
        id: "N",
        display_name: "Intuition (N)",
        keywords: &[
            "idea", "future", "pattern", "possibility", "theory",
            "intuition", "vision", "concept", "meaning", "想法", "未来",
            "可能性", "理论", "直觉", "愿景", "概念", "意义", "趋势",
        ],
    },
];

const MBTI_TF: &[Category] = &[
    Category {
        id: "T",
        display_name: "Thinking (T)",
        keywords: &[
            "logic", "analyze", "objective", "reason", "efficient",
            "evidence", "argument", "compare", "逻辑", "分析", "客观",
            "理性", "效率", "证据", "论证", "推理",
        ],
    },
    Category {
        id: "F",
        display_name: "Feeling (F)",
        keywords: &[
            "feel", "value", "empathy", "harmony", "care", "emotion",
            "heart", "appreciate", "感受", "价值", "共情", "和谐", "关心",
            "情感", "心情", "欣赏",
        ],
    },
];

const MBTI_JP: &[Category] = &[
    Category {
        id: "J",
        display_name: "Judging (J)",
        keywords: &[
            "plan", "decide", "schedule", "deadline", "order", "settle",
            "structure", "计划", "决定", "安排", "截止", "秩序", "确定",
            "规划",
        ],
    },
    Category {
        id: "P",
        display_name: "Perceiving (P)",
        keywords: &[
            "flexible", "spontaneous", "adapt", "open", "explore", "option",
            "improvise", "灵活", "随性", "适应", "开放", "探索", "选择",
            "随时",
        ],
    },
];

// ---------------------------------------------------------------------------
// Enneagram (unipolar, 9 types)
// ---------------------------------------------------------------------------

const ENNEAGRAM: &[Category] = &[
    Category {
        id: "type1",
        display_name: "Type 1 - Reformer",
        keywords: &[
            "perfect", "correct", "standard", "improve", "principle",
            "strict", "proper", "完美", "正确", "标准", "改进", "原则",
            "规范", "规矩",
        ],
    },
    Category {
        id: "type2",
        display_name: "Type 2 - Helper",
        keywords: &[
            "helping", "care", "support", "generous", "others", "kindness",
            "帮助", "关心", "支持", "付出", "别人", "照顾",
        ],
    },
    Category {
        id: "type3",
        display_name: "Type 3 - Achiever",
        keywords: &[
            "success", "achieve", "goal", "win", "efficient", "image",
            "performance", "成功", "成就", "目标", "高效", "效率", "形象",
            "业绩",
        ],
    },
    Category {
        id: "type4",
        display_name: "Type 4 - Individualist",
        keywords: &[
            "unique", "authentic", "feeling", "identity", "深刻", "独特",
            "真实", "感受", "身份", "与众不同", "自我",
        ],
    },
    Category {
        id: "type5",
        display_name: "Type 5 - Investigator",
        keywords: &[
            "understand", "research", "knowledge", "analyze", "observe",
            "study", "理解", "研究", "知识", "分析", "观察", "学习",
        ],
    },
    Category {
        id: "type6",
        display_name: "Type 6 - Loyalist",
        keywords: &[
            "safe", "secure", "doubt", "prepare", "risk", "loyal",
            "安全", "信任", "怀疑", "准备", "风险", "忠诚", "万一",
        ],
    },
    Category {
        id: "type7",
        display_name: "Type 7 - Enthusiast",
        keywords: &[
            "adventure", "exciting", "variety", "enjoy", "freedom",
            "有趣", "冒险", "新鲜", "兴奋", "享受", "自由",
        ],
    },
    Category {
        id: "type8",
        display_name: "Type 8 - Challenger",
        keywords: &[
            "power", "strong", "direct", "fight", "challenge", "justice",
            "掌控", "力量", "强大", "直接", "对抗", "挑战", "公正",
        ],
    },
    Category {
        id: "type9",
        display_name: "Type 9 - Peacemaker",
        keywords: &[
            "peace", "calm", "comfortable", "avoid", "merge", "easy",
            "平静", "和平", "舒服", "回避", "随和", "安稳",
        ],
    },
];

// ---------------------------------------------------------------------------
// Jungian archetypes (unipolar, 12)
// ---------------------------------------------------------------------------

const JUNGIAN: &[Category] = &[
    Category {
        id: "innocent",
        display_name: "Innocent",
        keywords: &[
            "simple", "pure", "hope", "happy", "optimistic", "简单", "纯粹",
            "希望", "快乐", "美好", "乐观",
        ],
    },
    Category {
        id: "everyman",
        display_name: "Everyman",
        keywords: &[
            "normal", "belong", "common", "ordinary", "relatable", "普通",
            "平凡", "融入", "大家", "一样", "接地气",
        ],
    },
    Category {
        id: "hero",
        display_name: "Hero",
        keywords: &[
            "challenge", "courage", "overcome", "prove", "victory", "挑战",
            "勇气", "克服", "证明", "坚强", "胜利",
        ],
    },
    Category {
        id: "caregiver",
        display_name: "Caregiver",
        keywords: &[
            "protect", "care", "nurture", "support", "helping", "照顾",
            "保护", "帮助", "呵护", "支持", "关爱",
        ],
    },
    Category {
        id: "explorer",
        display_name: "Explorer",
        keywords: &[
            "explore", "freedom", "travel", "discover", "journey", "探索",
            "自由", "旅行", "发现", "旅程", "远方",
        ],
    },
    Category {
        id: "rebel",
        display_name: "Rebel",
        keywords: &[
            "break", "change", "rule", "revolution", "different", "打破",
            "改变", "规则", "颠覆", "不同", "反叛",
        ],
    },
    Category {
        id: "lover",
        display_name: "Lover",
        keywords: &[
            "love", "passion", "beauty", "intimate", "romantic", "爱情",
            "热爱", "亲密", "浪漫", "美丽", "深情",
        ],
    },
    Category {
        id: "creator",
        display_name: "Creator",
        keywords: &[
            "build", "design", "craft", "original", "express", "创造",
            "设计", "打造", "原创", "作品", "表达",
        ],
    },
    Category {
        id: "jester",
        display_name: "Jester",
        keywords: &[
            "funny", "joke", "play", "laugh", "humor", "好玩", "搞笑",
            "玩笑", "幽默", "开心", "段子",
        ],
    },
    Category {
        id: "sage",
        display_name: "Sage",
        keywords: &[
            "wisdom", "truth", "learn", "understand", "insight", "智慧",
            "真理", "学习", "理解", "知识", "洞察",
        ],
    },
    Category {
        id: "magician",
        display_name: "Magician",
        keywords: &[
            "transform", "vision", "magic", "innovate", "manifest", "转化",
            "愿景", "创新", "奇迹", "变革",
        ],
    },
    Category {
        id: "ruler",
        display_name: "Ruler",
        keywords: &[
            "lead", "manage", "order", "responsibility", "authority",
            "领导", "管理", "秩序", "责任", "权威", "决策",
        ],
    },
];

// ---------------------------------------------------------------------------
// DISC (unipolar, 4)
// ---------------------------------------------------------------------------

const DISC: &[Category] = &[
    Category {
        id: "dominance",
        display_name: "Dominance",
        keywords: &[
            "assertive", "direct", "fast", "win", "decide", "drive",
            "结果", "直接", "快速", "决断", "推进", "搞定",
        ],
    },
    Category {
        id: "influence",
        display_name: "Influence",
        keywords: &[
            "inspire", "persuade", "enthusiasm", "social", "express",
            "影响", "说服", "热情", "社交", "表达", "感染",
        ],
    },
    Category {
        id: "steadiness",
        display_name: "Steadiness",
        keywords: &[
            "stable", "patient", "loyal", "consistent", "calm", "steady",
            "稳定", "耐心", "忠诚", "坚持", "平和", "踏实",
        ],
    },
    Category {
        id: "compliance",
        display_name: "Compliance",
        keywords: &[
            "accurate", "rule", "quality", "precise", "standard", "verify",
            "准确", "规则", "质量", "精确", "标准", "核对",
        ],
    },
];

// ---------------------------------------------------------------------------
// HEXACO Honesty-Humility (single global scalar)
// ---------------------------------------------------------------------------

const HEXACO: &[Category] = &[Category {
    id: "honesty_humility",
    display_name: "Honesty-Humility",
    keywords: &[
        "honest", "sincere", "fair", "modest", "humble", "genuine",
        "integrity", "诚实", "真诚", "公平", "谦虚", "低调", "正直", "坦诚",
    ],
}];

/// All trait groups in scoring order.
pub const TRAIT_GROUPS: &[TraitGroup] = &[
    TraitGroup {
        name: "big_five",
        kind: GroupKind::Unipolar,
        categories: BIG_FIVE,
    },
    TraitGroup {
        name: "mbti_ei",
        kind: GroupKind::Bipolar,
        categories: MBTI_EI,
    },
    TraitGroup {
        name: "mbti_sn",
        kind: GroupKind::Bipolar,
        categories: MBTI_SN,
    },
    TraitGroup {
        name: "mbti_tf",
        kind: GroupKind::Bipolar,
        categories: MBTI_TF,
    },
    TraitGroup {
        name: "mbti_jp",
        kind: GroupKind::Bipolar,
        categories: MBTI_JP,
    },
    TraitGroup {
        name: "enneagram",
        kind: GroupKind::Unipolar,
        categories: ENNEAGRAM,
    },
    TraitGroup {
        name: "jungian",
        kind: GroupKind::Unipolar,
        categories: JUNGIAN,
    },
    TraitGroup {
        name: "disc",
        kind: GroupKind::Unipolar,
        categories: DISC,
    },
    TraitGroup {
        name: "hexaco",
        kind: GroupKind::GlobalScalar,
        categories: HEXACO,
    },
];

// ---------------------------------------------------------------------------
// Emotions (16 categories, normalized against the emotion-set maximum)
// ---------------------------------------------------------------------------

/// The 16 emotion categories.
pub const EMOTIONS: &[Category] = &[
    Category {
        id: "joy",
        display_name: "Joy",
        keywords: &[
            "happy", "glad", "delight", "wonderful", "great", "awesome",
            "开心", "高兴", "快乐", "太棒", "喜悦",
        ],
    },
    Category {
        id: "sadness",
        display_name: "Sadness",
        keywords: &[
            "sad", "cry", "tears", "miss", "grief", "sorrow", "难过",
            "伤心", "悲伤", "哭泣", "失落",
        ],
    },
    Category {
        id: "anger",
        display_name: "Anger",
        keywords: &[
            "angry", "mad", "furious", "hate", "annoyed", "rage", "生气",
            "愤怒", "讨厌", "气死", "恼火",
        ],
    },
    Category {
        id: "fear",
        display_name: "Fear",
        keywords: &[
            "scared", "terrified", "dread", "horror", "害怕", "恐惧",
            "恐怖", "吓人", "畏惧",
        ],
    },
    Category {
        id: "surprise",
        display_name: "Surprise",
        keywords: &[
            "wow", "unexpected", "sudden", "amazing", "shocked", "惊讶",
            "意外", "突然", "震惊", "没想到",
        ],
    },
    Category {
        id: "disgust",
        display_name: "Disgust",
        keywords: &[
            "gross", "disgusting", "awful", "terrible", "nasty", "恶心",
            "厌恶", "糟糕", "反感",
        ],
    },
    Category {
        id: "trust",
        display_name: "Trust",
        keywords: &[
            "trust", "reliable", "believe", "depend", "faith", "信任",
            "可靠", "相信", "依赖", "放心",
        ],
    },
    Category {
        id: "anticipation",
        display_name: "Anticipation",
        keywords: &[
            "expect", "upcoming", "await", "soon", "forward", "期待",
            "期望", "盼望", "即将",
        ],
    },
    Category {
        id: "anxiety",
        display_name: "Anxiety",
        keywords: &[
            "anxious", "worried", "uneasy", "restless", "tense", "焦虑",
            "担心", "不安", "紧张", "心慌",
        ],
    },
    Category {
        id: "frustration",
        display_name: "Frustration",
        keywords: &[
            "frustrated", "stuck", "blocked", "useless", "fail", "烦躁",
            "卡住", "无语", "失败", "崩溃",
        ],
    },
    Category {
        id: "curiosity",
        display_name: "Curiosity",
        keywords: &[
            "curious", "wondering", "interesting", "intrigued", "好奇",
            "有意思", "有趣", "想知道",
        ],
    },
    Category {
        id: "confusion",
        display_name: "Confusion",
        keywords: &[
            "confused", "unclear", "puzzled", "lost", "understand",
            "困惑", "不懂", "迷茫", "搞不懂", "看不懂",
        ],
    },
    Category {
        id: "excitement",
        display_name: "Excitement",
        keywords: &[
            "excited", "thrilled", "hyped", "eager", "兴奋", "激动",
            "迫不及待", "热血",
        ],
    },
    Category {
        id: "gratitude",
        display_name: "Gratitude",
        keywords: &[
            "thanks", "thankful", "grateful", "appreciate", "感谢", "感恩",
            "谢谢", "多谢",
        ],
    },
    Category {
        id: "loneliness",
        display_name: "Loneliness",
        keywords: &[
            "lonely", "alone", "isolated", "nobody", "孤独", "寂寞",
            "孤单", "没人",
        ],
    },
    Category {
        id: "hope",
        display_name: "Hope",
        keywords: &[
            "hope", "wish", "better", "someday", "dream", "希望", "愿望",
            "梦想", "总有一天", "会好",
        ],
    },
];

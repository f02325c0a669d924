/// Colour and tagline assignment for card records.
use constants::catalog::{DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, DEFAULT_TAGLINE};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMetadata {
    pub primary_color: String,
    pub secondary_color: String,
    pub tagline: String,
}

struct NamedCard {
    name: &'static str,
    colors: (&'static str, &'static str),
    tagline: &'static str,
}

const fn named(
    name: &'static str,
    primary: &'static str,
    secondary: &'static str,
    tagline: &'static str,
) -> NamedCard {
    NamedCard {
        name,
        colors: (primary, secondary),
        tagline,
    }
}

/// Hand-curated cards. An entry here wins over every heuristic.
const NAMED_CARDS: &[NamedCard] = &[
    // taptap
    named("삼성카드 taptap O", "#e91e63", "#f48fb1", "다양한 혜택을 한 장에!"),
    named("삼성카드 taptap S", "#e91e63", "#f48fb1", "스마트한 일상의 시작"),
    named("taptap DIGITAL", "#7c4dff", "#b388ff", "디지털 라이프 필수템"),
    named("taptap DRIVE", "#0277bd", "#4fc3f7", "드라이버를 위한 스마트 혜택"),
    named("taptap SHOPPING", "#ff5722", "#ff8a65", "쇼핑의 즐거움을 더하다"),
    named("삼성페이 삼성카드 taptap", "#e91e63", "#f48fb1", "삼성페이와 함께하는 혜택"),
    named("네이버페이 taptap", "#03c75a", "#00e676", "네이버와 함께하는 스마트 페이"),
    named("CU·배달의민족 삼성카드 taptap", "#3bb7c8", "#81d4fa", "편의점과 배달의 꿀조합"),
    // iD
    named("삼성 iD SELECT ALL 카드", "#1428a0", "#2d4de0", "선택이 곧 혜택"),
    named("삼성 iD SELECT ON 카드", "#1428a0", "#2d4de0", "나만의 혜택을 선택하다"),
    named("삼성 iD SIMPLE 카드", "#333333", "#666666", "심플하게, 알차게"),
    named("삼성 iD ENERGY 카드", "#f57c00", "#ffb74d", "에너지 넘치는 혜택"),
    named("삼성 iD ON 카드", "#5c6bc0", "#9fa8da", "언제나 켜져있는 혜택"),
    named("삼성 iD PLUG-IN 카드", "#26a69a", "#80cbc4", "일상에 혜택을 플러그인"),
    named("삼성 iD ALL 카드", "#1428a0", "#2d4de0", "모든 혜택을 한 장에"),
    named("삼성 iD GLOBAL 카드", "#1e3a5f", "#3d5a80", "해외에서 빛나는 혜택"),
    named("삼성 iD VITA 카드", "#ec407a", "#f48fb1", "건강한 라이프 파트너"),
    named("삼성 iD PET 카드", "#8d6e63", "#bcaaa4", "반려동물과 함께하는 혜택"),
    named("삼성 iD ONE 카드", "#1428a0", "#2d4de0", "하나로 충분한 혜택"),
    named("삼성 iD STATION 카드 (GS칼텍스)", "#ff6f00", "#ffab40", "주유할 때마다 스마트하게"),
    named("삼성 iD STATION 카드 (SK에너지)", "#d32f2f", "#ef5350", "SK와 함께하는 주유 혜택"),
    named("삼성 iD NOMAD 카드", "#00897b", "#4db6ac", "자유로운 라이프를 위한 카드"),
    // monimo
    named("모니모카드", "#0096d6", "#00c3ff", "모이는 금융 커지는 혜택"),
    named("모니모A 카드", "#00bcd4", "#4dd0e1", "모니모로 시작하는 금융"),
    // premium
    named("THE iD. PLATINUM (포인트)", "#424242", "#757575", "프리미엄 라이프의 시작"),
    named("THE iD. 1st", "#212121", "#424242", "최고를 위한 선택"),
    named("THE 1 (스카이패스)", "#1a237e", "#3949ab", "여행의 품격을 높이다"),
    named("BIZ THE iD. PLATINUM (포인트)", "#37474f", "#607d8b", "비즈니스 프리미엄 파트너"),
    named("아메리칸 엑스프레스 블루", "#006fcf", "#00a1e4", "글로벌 프리미엄 혜택"),
    named("아메리칸 엑스프레스 리저브", "#1a1a1a", "#4a4a4a", "럭셔리 라이프의 정수"),
    // mileage
    named("삼성카드 & MILEAGE PLATINUM (스카이패스)", "#0d47a1", "#1976d2", "하늘을 향한 마일리지"),
    named("삼성카드 스페셜마일리지 (스카이패스)", "#1565c0", "#42a5f5", "특별한 마일리지 적립"),
    // partners
    named("신세계이마트 삼성카드 7", "#fbc02d", "#fff176", "장보기가 즐거워지는 혜택"),
    named("트레이더스 신세계 삼성카드", "#f9a825", "#ffee58", "대용량 쇼핑의 스마트 파트너"),
    named("이마트신세계 삼성카드", "#fdd835", "#fff59d", "쇼핑 라이프의 필수 카드"),
    named("하나투어 삼성카드", "#0288d1", "#4fc3f7", "여행의 시작과 끝"),
    named("롯데월드카드 (삼성카드)", "#e53935", "#ef5350", "놀이동산이 즐거워지는 카드"),
    named("에버랜드 삼성카드", "#43a047", "#81c784", "에버랜드와 함께하는 즐거움"),
    named("알라딘 만권당 삼성카드", "#5d4037", "#8d6e63", "책과 함께하는 지적 라이프"),
    named("다이소 삼성카드", "#ff7043", "#ffab91", "알뜰 쇼핑의 필수템"),
    named("KTX 삼성카드", "#ff5722", "#ff8a65", "빠른 이동, 빠른 혜택"),
    named("K-패스 삼성카드", "#00acc1", "#4dd0e1", "대중교통 필수 동반자"),
    named("기후동행 삼성카드", "#66bb6a", "#a5d6a7", "친환경 교통의 시작"),
    named("단비교육 삼성카드", "#7cb342", "#aed581", "아이 교육의 든든한 파트너"),
    named("엠베스트 엘리하이 삼성카드", "#ff9800", "#ffcc80", "자녀 학습을 위한 스마트 선택"),
    named("삼성카드 BIZ LEADERS", "#37474f", "#78909c", "비즈니스 리더를 위한 카드"),
    named("삼성 BIZ iD BENEFIT 카드", "#455a64", "#90a4ae", "사업자를 위한 맞춤 혜택"),
    named("MY S-OIL 삼성카드", "#ffc107", "#ffe082", "주유가 즐거워지는 카드"),
    named("삼성카앤모아카드", "#546e7a", "#90a4ae", "차량 생활의 모든 것"),
    named("국민행복 삼성카드 V2", "#4caf50", "#81c784", "국민과 함께하는 행복 혜택"),
];

/// Name keywords to colour pairs. First match in list order wins.
const KEYWORD_COLORS: &[(&str, (&str, &str))] = &[
    ("주유", ("#ff6f00", "#ffab40")),
    ("DRIVE", ("#0277bd", "#4fc3f7")),
    ("교통", ("#00acc1", "#4dd0e1")),
    ("쇼핑", ("#ff5722", "#ff8a65")),
    ("커피", ("#6d4c41", "#a1887f")),
    ("스트리밍", ("#7c4dff", "#b388ff")),
    ("DIGITAL", ("#7c4dff", "#b388ff")),
    ("항공", ("#0d47a1", "#1976d2")),
    ("마일리지", ("#1565c0", "#42a5f5")),
    ("PLATINUM", ("#424242", "#757575")),
    ("GLOBAL", ("#1e3a5f", "#3d5a80")),
    ("BIZ", ("#37474f", "#78909c")),
    ("PET", ("#8d6e63", "#bcaaa4")),
    ("VITA", ("#ec407a", "#f48fb1")),
];

/// Name keywords to taglines. First match in list order wins.
const KEYWORD_TAGLINES: &[(&str, &str)] = &[
    ("SELECT", "나에게 맞는 혜택 선택"),
    ("주유", "주유할 때마다 스마트하게"),
    ("DRIVE", "드라이버를 위한 스마트 혜택"),
    ("교통", "이동이 즐거워지는 혜택"),
    ("쇼핑", "쇼핑의 즐거움을 더하다"),
    ("커피", "커피 한 잔의 여유와 함께"),
    ("스트리밍", "디지털 라이프의 필수템"),
    ("DIGITAL", "디지털 라이프를 위한 선택"),
    ("항공", "하늘을 향한 혜택"),
    ("마일리지", "마일리지가 모이는 카드"),
    ("MILEAGE", "마일리지가 모이는 카드"),
    ("PLATINUM", "프리미엄 라이프를 위한 선택"),
    ("GLOBAL", "해외에서 빛나는 혜택"),
    ("BIZ", "비즈니스를 위한 스마트 파트너"),
    ("PET", "반려동물과 함께하는 혜택"),
    ("VITA", "건강한 라이프 파트너"),
    ("ENERGY", "에너지 넘치는 일상"),
    ("SIMPLE", "심플하게, 알차게"),
    ("모니모", "모이는 금융, 커지는 혜택"),
    ("taptap", "스마트한 일상의 시작"),
    ("신세계", "쇼핑이 즐거워지는 카드"),
    ("이마트", "장보기의 필수 파트너"),
    ("롯데", "즐거움이 가득한 카드"),
    ("에버랜드", "놀이가 즐거워지는 카드"),
    ("알라딘", "책과 함께하는 라이프"),
    ("다이소", "알뜰 쇼핑의 필수템"),
    ("KTX", "빠른 이동, 빠른 혜택"),
    ("교육", "자녀 교육의 든든한 파트너"),
    ("국민행복", "국민과 함께하는 행복"),
];

fn contains_keyword(name: &str, keyword: &str) -> bool {
    name.to_uppercase().contains(&keyword.to_uppercase())
}

/// Tagline implied by the spread of benefit categories, if any.
fn tagline_from_categories(categories: &HashSet<&str>) -> Option<&'static str> {
    if categories.len() >= 4 {
        Some("다양한 혜택을 한 장에!")
    } else if categories.contains("커피") && categories.contains("쇼핑") {
        Some("카페와 쇼핑의 스마트 혜택")
    } else if categories.contains("주유") {
        Some("주유가 즐거워지는 카드")
    } else if categories.contains("항공") {
        Some("여행을 위한 마일리지 카드")
    } else {
        None
    }
}

pub fn card_metadata(name: &str, categories: &HashSet<&str>) -> CardMetadata {
    if let Some(card) = NAMED_CARDS.iter().find(|card| card.name == name) {
        return CardMetadata {
            primary_color: card.colors.0.to_string(),
            secondary_color: card.colors.1.to_string(),
            tagline: card.tagline.to_string(),
        };
    }

    let (primary, secondary) = KEYWORD_COLORS
        .iter()
        .find(|(keyword, _)| contains_keyword(name, keyword))
        .map(|(_, colors)| *colors)
        .unwrap_or((DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR));

    let keyword_tagline = KEYWORD_TAGLINES
        .iter()
        .find(|(keyword, _)| contains_keyword(name, keyword))
        .map(|(_, tagline)| *tagline)
        .unwrap_or(DEFAULT_TAGLINE);

    CardMetadata {
        primary_color: primary.to_string(),
        secondary_color: secondary.to_string(),
        tagline: tagline_from_categories(categories)
            .unwrap_or(keyword_tagline)
            .to_string(),
    }
}

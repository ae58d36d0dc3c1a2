//! Descriptive profiles for the nine constitution categories.

use serde::Serialize;

use crate::domain::foundation::ConstitutionType;

/// Lifestyle advice attached to a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub diet: &'static str,
    pub living: &'static str,
    pub exercise: &'static str,
}

/// Reference description of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConstitutionProfile {
    pub category: ConstitutionType,
    pub name: &'static str,
    /// Single-glyph summary shown on badges.
    pub element: &'static str,
    pub summary: &'static str,
    pub features: &'static str,
    pub advice: Advice,
}

/// Returns the profile for `category`.
pub fn profile_for(category: ConstitutionType) -> ConstitutionProfile {
    let (element, summary, features, advice) = match category {
        ConstitutionType::Balanced => (
            "平",
            "阴阳气血调和，体态适中，面色红润，精力充沛。",
            "身体健康，较少患病，对自然环境和社会环境适应能力较强。",
            Advice {
                diet: "饮食有节，不吃过冷过热，细嚼慢咽，饮食多样化。",
                living: "起居规律，睡眠充足，劳逸结合，保持乐观心态。",
                exercise: "根据年龄和体力，坚持适当运动，如散步、慢跑、太极拳。",
            },
        ),
        ConstitutionType::QiDeficiency => (
            "虚",
            "元气不足，肌肉松软，声音低弱，易气短，易疲乏，易感冒。",
            "气短懒言，容易疲劳，常自汗出，舌淡红，舌边有齿痕。",
            Advice {
                diet: "多吃益气健脾的食物，如黄豆、白扁豆、鸡肉、大枣。少吃空心菜、生萝卜等耗气食物。",
                living: "注意保暖，避免劳动过度，不要熬夜，保持充足睡眠。",
                exercise: "适合柔缓的运动，如八段锦、太极拳，不宜剧烈运动。",
            },
        ),
        ConstitutionType::YangDeficiency => (
            "寒",
            "阳气不足，手脚发凉，怕冷，喜热饮，性格安静，面色偏白。",
            "畏寒怕冷，手足不温，喜热饮食，精神不振，舌淡胖嫩。",
            Advice {
                diet: "多吃甘温益气的食物，如羊肉、韭菜、生姜、桂圆。少吃生冷寒凉食物。",
                living: "居住环境宜阳光充足，注意足部、背部保暖，多晒太阳。",
                exercise: "适合动静结合的运动，要在阳光充足时锻炼，如快走、慢跑。",
            },
        ),
        ConstitutionType::YinDeficiency => (
            "热",
            "阴液亏少，手心脚心热，口干咽燥，易失眠，性急躁，体形偏瘦。",
            "口燥咽干，手足心热，喜冷饮，大便干燥，舌红少津。",
            Advice {
                diet: "多吃甘凉滋润的食物，如鸭肉、百合、银耳、黑芝麻。少吃温热燥烈之品。",
                living: "避免熬夜，保持皮肤清洁，中午宜小睡，居室保持安静。",
                exercise: "适合中小强度运动，如太极、游泳，控制出汗量，避免大汗伤阴。",
            },
        ),
        ConstitutionType::PhlegmDampness => (
            "湿",
            "痰湿凝聚，腹部肥满，皮肤油腻，汗多黏腻，身重困倦，口黏。",
            "形体肥胖，腹部肥满松软，面部油脂较多，舌苔厚腻。",
            Advice {
                diet: "饮食清淡，多吃健脾利湿的食物，如冬瓜、薏米、赤小豆。少吃甜食、肥肉。",
                living: "居住环境宜干燥，穿衣宽大透气，多晒太阳，避免潮湿。",
                exercise: "应长期坚持中长跑、球类等运动，增加出汗量，促进代谢。",
            },
        ),
        ConstitutionType::DampHeat => (
            "蕴",
            "湿热内蕴，面垢油光，易生痤疮，口苦口臭，心烦懈怠，小便短赤。",
            "面部油脂分泌多，容易长痘，身重困倦，大便黏滞。",
            Advice {
                diet: "饮食清淡，多吃甘寒食物，如绿豆、空心菜、芹菜。禁酒，少吃辛辣滋腻食物。",
                living: "避开潮湿环境，保持二便通畅，穿宽松透气衣物。",
                exercise: "大强度运动以消耗体力，如长跑、爬山，要在凉爽时段进行。",
            },
        ),
        ConstitutionType::BloodStasis => (
            "滞",
            "血行不畅，面色晦暗，皮肤粗糙，易有瘀斑，健忘，口唇黯淡。",
            "肤色晦黯，色素沉着，容易出现瘀斑，口唇黯淡紫暗。",
            Advice {
                diet: "多吃具有行气活血功能的食物，如山楂、黑豆、金桔、玫瑰花。",
                living: "保持心情舒畅，不可过于安逸，以免气机郁滞。",
                exercise: "可进行舞蹈、瑜伽、太极剑等有助于气血流通的运动。",
            },
        ),
        ConstitutionType::QiStagnation => (
            "郁",
            "气机郁滞，神情抑郁，多愁善感，常叹气，乳房胀痛，胸闷。",
            "神情抑郁，忧虑脆弱，情绪低落，容易紧张焦虑。",
            Advice {
                diet: "多吃行气解郁的食物，如佛手、橙子、玫瑰花。少吃收敛酸涩之物。",
                living: "多参加社交活动，居住环境宜明亮，听欢快音乐。",
                exercise: "参加团体运动，如球类、登山、旅游，大声喊叫抒发胸志。",
            },
        ),
        ConstitutionType::SpecialDiathesis => (
            "敏",
            "先天失常，容易过敏，药物、食物、花粉过敏，或有遗传病。",
            "过敏体质，易患哮喘、荨麻疹、花粉症等过敏性疾病。",
            Advice {
                diet: "饮食清淡粗细搭配，少吃荞麦、蚕豆等发物。根据过敏源避免特定食物。",
                living: "保持室内清洁，避免接触花粉、宠物毛发等致敏源。",
                exercise: "不宜过于剧烈，根据具体过敏源选择室内或室外运动。",
            },
        ),
    };

    ConstitutionProfile {
        category,
        name: category.display_name(),
        element,
        summary,
        features,
        advice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_profile() {
        for category in ConstitutionType::all() {
            let profile = profile_for(*category);
            assert_eq!(profile.category, *category);
            assert_eq!(profile.element.chars().count(), 1);
            assert!(!profile.summary.is_empty());
            assert!(!profile.advice.diet.is_empty());
        }
    }

    #[test]
    fn profile_name_matches_display_name() {
        let profile = profile_for(ConstitutionType::DampHeat);
        assert_eq!(profile.name, "湿热质");
        assert_eq!(profile.element, "蕴");
    }

    #[test]
    fn profile_serializes_category_key() {
        let json = serde_json::to_value(profile_for(ConstitutionType::Balanced)).unwrap();
        assert_eq!(json["category"], "pinghe");
        assert!(json["advice"]["exercise"].as_str().unwrap().contains("太极拳"));
    }
}

//! 固定提示语（阿拉伯语 / 英语）
//!
//! 提交确认与完成提示为静态文案，随请求语言切换；不属于 Provider 输出。

use crate::types::Language;

/// 提交后立即追加的确认消息
pub fn ack_message(language: Language) -> &'static str {
    match language {
        Language::Ar => {
            "تم الاستلام. سأقوم الآن بربط قواعد البيانات الحية واستخراج استراتيجية الهيمنة الخاصة بك."
        }
        Language::En => {
            "Received. I am now connecting to live databases to extract your dominance strategy."
        }
    }
}

/// 全部结果发布后追加的完成消息
pub fn completion_message(language: Language) -> &'static str {
    match language {
        Language::Ar => "تم اكتمال التحليل والتنفيذ. الملفات جاهزة في مساحة العمل.",
        Language::En => "Analysis and execution complete. Assets ready in workspace.",
    }
}

/// 请求失败时前端展示的错误提示（不写入会话历史）
pub fn error_message(language: Language) -> &'static str {
    match language {
        Language::Ar => "فشل الطلب. حاول مرة أخرى.",
        Language::En => "Request failed, try again.",
    }
}

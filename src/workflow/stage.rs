//! 流水线阶段定义

use crate::agents::Role;

/// 第 4 阶段上下文中前端规格的标签
pub const FRONTEND_LABEL: &str = "Especificações de Front-End:";
/// 第 4 阶段上下文中后端规格的标签
pub const BACKEND_LABEL: &str = "Especificações de Back-End:";

/// 五个固定阶段，按执行顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// 业务概念分析
    BusinessConcept,
    /// 前端规格
    FrontendSpec,
    /// 后端规格
    BackendSpec,
    /// 练习草稿
    ChallengeDraft,
    /// 教学审阅
    PedagogicalReview,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::BusinessConcept,
        Stage::FrontendSpec,
        Stage::BackendSpec,
        Stage::ChallengeDraft,
        Stage::PedagogicalReview,
    ];

    /// 阶段序号（从1开始）
    pub fn number(self) -> usize {
        match self {
            Stage::BusinessConcept => 1,
            Stage::FrontendSpec => 2,
            Stage::BackendSpec => 3,
            Stage::ChallengeDraft => 4,
            Stage::PedagogicalReview => 5,
        }
    }

    /// 负责该阶段的角色
    pub fn role(self) -> Role {
        match self {
            Stage::BusinessConcept => Role::BusinessAnalyst,
            Stage::FrontendSpec => Role::UiUxEngineer,
            Stage::BackendSpec => Role::BackendArchitect,
            Stage::ChallengeDraft => Role::ContentDeveloper,
            Stage::PedagogicalReview => Role::PedagogicalReviewer,
        }
    }

    /// 该阶段交给 agent 的任务
    pub fn task(self, seed_url: &str) -> String {
        match self {
            Stage::BusinessConcept => format!("Analise a URL: {}", seed_url),
            Stage::FrontendSpec => "Liste os componentes de UI/UX.".to_string(),
            Stage::BackendSpec => "Projete a API e os modelos de dados.".to_string(),
            Stage::ChallengeDraft => "Crie o desafio de programação.".to_string(),
            Stage::PedagogicalReview => "Revise e formate esta atividade.".to_string(),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Stage::BusinessConcept => "ETAPA 1: CONCEITO DE NEGÓCIO",
            Stage::FrontendSpec => "ETAPA 2: ESPECIFICAÇÕES DE FRONT-END",
            Stage::BackendSpec => "ETAPA 3: ESPECIFICAÇÕES DE BACK-END",
            Stage::ChallengeDraft => "ETAPA 4: RASCUNHO DA ATIVIDADE",
            Stage::PedagogicalReview => "ETAPA 5: ATIVIDADE FINAL REVISADA",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Stage::BusinessConcept => "💡",
            Stage::FrontendSpec => "🎨",
            Stage::BackendSpec => "⚙️",
            Stage::ChallengeDraft => "📝",
            Stage::PedagogicalReview => "✨",
        }
    }

    pub fn is_last(self) -> bool {
        self == Stage::PedagogicalReview
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// 第 4 阶段的上下文：前端规格在前，后端规格在后
pub fn challenge_context(frontend: &str, backend: &str) -> String {
    format!(
        "{}\n{}\n\n{}\n{}",
        FRONTEND_LABEL, frontend, BACKEND_LABEL, backend
    )
}

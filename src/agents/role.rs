use crate::agents::prompts;

/// Agent 角色枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// 业务分析师
    BusinessAnalyst,
    /// 前端 / UI-UX 工程师
    UiUxEngineer,
    /// 后端架构师
    BackendArchitect,
    /// 教学内容开发者
    ContentDeveloper,
    /// 教学审阅者
    PedagogicalReviewer,
    /// 随机网址探索者
    RandomExplorer,
    /// 全栈技术清单
    FullStackTechnologies,
    /// 实际使用案例
    PracticalExamples,
    /// 职业建议
    CareerTips,
    /// 自动化测试建议
    AutomatedTests,
    /// 技术趣闻
    TechCuriosities,
}

impl Role {
    /// 全部角色，按注册顺序
    pub const ALL: [Role; 11] = [
        Role::BusinessAnalyst,
        Role::UiUxEngineer,
        Role::BackendArchitect,
        Role::ContentDeveloper,
        Role::PedagogicalReviewer,
        Role::RandomExplorer,
        Role::FullStackTechnologies,
        Role::PracticalExamples,
        Role::CareerTips,
        Role::AutomatedTests,
        Role::TechCuriosities,
    ];

    /// 获取展示名称
    pub fn name(self) -> &'static str {
        match self {
            Role::BusinessAnalyst => "Analisador de Negócios",
            Role::UiUxEngineer => "Engenheiro de UI/UX",
            Role::BackendArchitect => "Arquiteto de Back-End",
            Role::ContentDeveloper => "Desenvolvedor de Conteúdo Didático",
            Role::PedagogicalReviewer => "Revisor Pedagógico",
            Role::RandomExplorer => "Explorador Web Aleatório",
            Role::FullStackTechnologies => "Tecnologias Full Stack",
            Role::PracticalExamples => "Exemplos Práticos",
            Role::CareerTips => "Dicas de Carreira",
            Role::AutomatedTests => "Testes Automatizados",
            Role::TechCuriosities => "Curiosidades Tecnológicas",
        }
    }

    /// 获取固定的系统指令
    pub fn instruction(self) -> &'static str {
        match self {
            Role::BusinessAnalyst => prompts::BUSINESS_ANALYST,
            Role::UiUxEngineer => prompts::UI_UX_ENGINEER,
            Role::BackendArchitect => prompts::BACKEND_ARCHITECT,
            Role::ContentDeveloper => prompts::CONTENT_DEVELOPER,
            Role::PedagogicalReviewer => prompts::PEDAGOGICAL_REVIEWER,
            Role::RandomExplorer => prompts::RANDOM_EXPLORER,
            Role::FullStackTechnologies => prompts::FULL_STACK_TECHNOLOGIES,
            Role::PracticalExamples => prompts::PRACTICAL_EXAMPLES,
            Role::CareerTips => prompts::CAREER_TIPS,
            Role::AutomatedTests => prompts::AUTOMATED_TESTS,
            Role::TechCuriosities => prompts::TECH_CURIOSITIES,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

use dioxus::prelude::*;
use strum::{Display, EnumIter};

use recipe_mypage::ingredient::NewIngredient;

pub static UI_MODEL: GlobalSignal<MyPageUIModel> = Signal::global(Default::default);

#[derive(Debug, Default)]
pub struct MyPageUIModel {
    pub selected_menu: MyPageMenu,
    pub selected_authored_tab: AuthoredRecipesTab,
    pub ingredient_form: NewIngredient,
    pub delete_account_modal_opened: bool,
    pub is_processing: bool,
}

impl MyPageUIModel {
    /// The authored sub-tab is kept across menu changes
    pub fn select_menu(&mut self, menu: MyPageMenu) {
        self.selected_menu = menu;
    }

    pub fn reset_ingredient_form(&mut self) {
        self.ingredient_form = NewIngredient::default();
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Display, EnumIter)]
pub enum MyPageMenu {
    #[default]
    #[strum(to_string = "나의 정보 수정")]
    EditProfile,
    #[strum(to_string = "나의 냉장고 재료 등록하기")]
    MyIngredients,
    #[strum(to_string = "레시피 등록하기")]
    RegisterRecipe,
    #[strum(to_string = "좋아요 누른 레시피들")]
    LikedRecipes,
    #[strum(to_string = "찜한 레시피들")]
    SavedRecipes,
    #[strum(to_string = "내가 작성한 레시피")]
    MyAuthoredRecipes,
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Display, EnumIter)]
pub enum AuthoredRecipesTab {
    #[strum(to_string = "공개중")]
    Public,
    #[default]
    #[strum(to_string = "작성중")]
    Draft,
}

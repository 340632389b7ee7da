//! Shared application state.

use std::sync::Arc;

use crate::{
    domain::{IdGenerator, RoomRepository},
    usecase::{
        CreateRoomUseCase, DeleteRoomUseCase, GetRoomUseCase, GetVoteOptionsUseCase,
        JoinRoomUseCase, ResetVotesUseCase, RevealVotesUseCase, SubmitVoteUseCase,
    },
};

/// Shared application state handed to every handler
pub struct AppState {
    /// CreateRoomUseCase（Room 作成のユースケース）
    pub create_room_usecase: Arc<CreateRoomUseCase>,
    /// GetRoomUseCase（Room 取得のユースケース）
    pub get_room_usecase: Arc<GetRoomUseCase>,
    /// DeleteRoomUseCase（Room 削除のユースケース）
    pub delete_room_usecase: Arc<DeleteRoomUseCase>,
    /// JoinRoomUseCase（Room 参加のユースケース）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// SubmitVoteUseCase（投票のユースケース）
    pub submit_vote_usecase: Arc<SubmitVoteUseCase>,
    /// GetVoteOptionsUseCase（選択肢取得のユースケース）
    pub get_vote_options_usecase: Arc<GetVoteOptionsUseCase>,
    /// RevealVotesUseCase（投票公開のユースケース）
    pub reveal_votes_usecase: Arc<RevealVotesUseCase>,
    /// ResetVotesUseCase（ラウンドリセットのユースケース）
    pub reset_votes_usecase: Arc<ResetVotesUseCase>,
}

impl AppState {
    /// Build every use case on top of one repository and id generator
    pub fn new(repository: Arc<dyn RoomRepository>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            create_room_usecase: Arc::new(CreateRoomUseCase::new(
                repository.clone(),
                id_generator.clone(),
            )),
            get_room_usecase: Arc::new(GetRoomUseCase::new(repository.clone())),
            delete_room_usecase: Arc::new(DeleteRoomUseCase::new(repository.clone())),
            join_room_usecase: Arc::new(JoinRoomUseCase::new(repository.clone(), id_generator)),
            submit_vote_usecase: Arc::new(SubmitVoteUseCase::new(repository.clone())),
            get_vote_options_usecase: Arc::new(GetVoteOptionsUseCase::new(repository.clone())),
            reveal_votes_usecase: Arc::new(RevealVotesUseCase::new(repository.clone())),
            reset_votes_usecase: Arc::new(ResetVotesUseCase::new(repository)),
        }
    }
}

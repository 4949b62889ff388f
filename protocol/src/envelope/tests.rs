#[cfg(test)]
mod tests {
    use crate::{
        BattleResult, Envelope, MonsterList, ParseError, PayResult, decode_response,
        decode_status,
    };

    #[test]
    fn test_parse_envelope_keeps_payload_opaque() {
        let body = r#"{"code":"SUCCESS","message":"ok","data":{"pay":true,"amount":"5"}}"#;
        let envelope = Envelope::parse(body).unwrap();

        assert!(envelope.is_success());
        assert_eq!(envelope.message.as_deref(), Some("ok"));
        assert!(envelope.data.unwrap().is_object());
    }

    #[test]
    fn test_decode_pay_result() {
        let body = r#"{"code":"SUCCESS","data":{"pay":true,"amount":5}}"#;
        let pay: PayResult = decode_response(body).unwrap();

        assert!(pay.pay);
        assert_eq!(pay.amount, 5);
    }

    #[test]
    fn test_decode_battle_result() {
        let body = r#"{"code":"SUCCESS","data":{"challengeResult":true,"challengeExp":5,"bpFragmentNum":12}}"#;
        let result: BattleResult = decode_response(body).unwrap();

        assert!(result.challenge_result);
        assert_eq!(result.challenge_exp, 5);
        assert_eq!(result.bp_fragment_num, 12);
    }

    #[test]
    fn test_battle_result_requires_outcome() {
        let body = r#"{"code":"SUCCESS","data":{}}"#;
        let err = decode_response::<BattleResult>(body).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));

        let body = r#"{"code":"FAIL","data":{"challengeExp":3}}"#;
        assert!(decode_response::<BattleResult>(body).is_err());
    }

    #[test]
    fn test_decode_monster_list_with_quoted_numbers() {
        let body = r#"{
            "code": "SUCCESS",
            "data": {
                "metamonList": [
                    {"id": 8812, "tokenId": "1023", "owner": "0xabc", "rarity": "R",
                     "level": "21", "exp": 100, "expMax": "395", "tear": 3, "sca": 310}
                ]
            }
        }"#;
        let list: MonsterList = decode_response(body).unwrap();

        assert_eq!(list.monsters.len(), 1);
        let monster = &list.monsters[0];
        assert_eq!(monster.id, "8812");
        assert_eq!(monster.level, 21);
        assert_eq!(monster.exp_max, 395);
        assert_eq!(monster.tear, 3);
        assert_eq!(monster.sca, 310);
    }

    #[test]
    fn test_non_success_without_payload_is_rejected() {
        let body = r#"{"code":"FAIL","message":"token expired","data":null}"#;
        let result: Result<PayResult, _> = decode_response(body);

        match result {
            Err(ParseError::Rejected { code, message }) => {
                assert_eq!(code, "FAIL");
                assert_eq!(message, "token expired");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_success_without_payload_is_missing_data() {
        let body = r#"{"code":"SUCCESS"}"#;
        let result: Result<PayResult, _> = decode_response(body);

        assert!(matches!(result, Err(ParseError::MissingData)));
    }

    #[test]
    fn test_non_success_with_payload_still_decodes() {
        let body = r#"{"code":"FAIL","message":"not enough raca","data":{"pay":false,"amount":0}}"#;
        let pay: PayResult = decode_response(body).unwrap();

        assert!(!pay.pay);
    }

    #[test]
    fn test_malformed_body() {
        let result: Result<PayResult, _> = decode_response("<html>502</html>");

        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_decode_status() {
        assert_eq!(decode_status(r#"{"code":"SUCCESS","data":null}"#).unwrap(), "SUCCESS");
        assert!(decode_status("").is_err());
    }

    #[test]
    fn test_malformed_number_is_an_error() {
        let body = r#"{"code":"SUCCESS","data":{"metamonList":[{"id":"1","level":"twenty"}]}}"#;
        let result: Result<MonsterList, _> = decode_response(body);

        assert!(result.is_err());
    }
}
